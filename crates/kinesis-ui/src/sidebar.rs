//! Exercise filter sidebar: a category list whose rows open flyouts.
//!
//! A category can be chosen two ways. Clicking the row picks the whole
//! category directly and closes any flyout. Picking from a flyout sets both
//! category and subcategory ("All" leaves the subcategory unset).

use std::cell::RefCell;
use std::rc::Rc;

use kinesis_core::{Clock, Rect};

use crate::flyout::{FlyoutConfig, FlyoutMenuController, Selection};
use crate::menu::CategoryMenu;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

type CategoryHandler = Box<dyn FnMut(&str)>;
type SubcategoryHandler = Box<dyn FnMut(&str, &str)>;

pub struct CategorySidebar {
    flyout: FlyoutMenuController,
    active: Rc<RefCell<ActiveFilter>>,
    on_category: Option<CategoryHandler>,
    on_subcategory: Rc<RefCell<Option<SubcategoryHandler>>>,
}

impl CategorySidebar {
    pub fn new(menu: Rc<CategoryMenu>, clock: Rc<dyn Clock>, config: FlyoutConfig) -> Self {
        let active = Rc::new(RefCell::new(ActiveFilter::default()));
        let on_subcategory: Rc<RefCell<Option<SubcategoryHandler>>> = Rc::new(RefCell::new(None));

        let mut flyout = FlyoutMenuController::with_config(menu, clock, config);
        {
            let active = active.clone();
            let on_subcategory = on_subcategory.clone();
            flyout.set_on_select(move |category, sub| {
                *active.borrow_mut() = ActiveFilter {
                    category: Some(category.to_owned()),
                    subcategory: (!sub.is_empty()).then(|| sub.to_owned()),
                };
                if let Some(handler) = on_subcategory.borrow_mut().as_mut() {
                    handler(category, sub);
                }
            });
        }

        Self {
            flyout,
            active,
            on_category: None,
            on_subcategory,
        }
    }

    pub fn on_category_selected(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_category = Some(Box::new(handler));
        self
    }

    /// `handler(category, subcategory)`; the subcategory is empty for "All".
    pub fn on_subcategory_selected(self, handler: impl FnMut(&str, &str) + 'static) -> Self {
        *self.on_subcategory.borrow_mut() = Some(Box::new(handler));
        self
    }

    pub fn flyout(&self) -> &FlyoutMenuController {
        &self.flyout
    }

    pub fn flyout_mut(&mut self) -> &mut FlyoutMenuController {
        &mut self.flyout
    }

    pub fn menu(&self) -> &Rc<CategoryMenu> {
        self.flyout.menu()
    }

    pub fn hover_row(&mut self, category: &str, row: Rect) {
        self.flyout.on_enter_trigger(category, row);
    }

    pub fn leave_row(&mut self) {
        self.flyout.on_leave_trigger();
    }

    /// Direct click on a category row. Unknown categories are ignored.
    pub fn click_category(&mut self, category: &str) -> bool {
        if !self.flyout.menu().contains(category) {
            return false;
        }
        self.flyout.close();
        *self.active.borrow_mut() = ActiveFilter {
            category: Some(category.to_owned()),
            subcategory: None,
        };
        log::debug!("sidebar: category '{category}' clicked");
        if let Some(handler) = self.on_category.as_mut() {
            handler(category);
        }
        true
    }

    pub fn select(&mut self, category: &str, selection: Selection) {
        self.flyout.on_select_item(category, selection);
    }

    pub fn active(&self) -> ActiveFilter {
        self.active.borrow().clone()
    }

    pub fn clear(&mut self) {
        self.flyout.close();
        *self.active.borrow_mut() = ActiveFilter::default();
    }
}
