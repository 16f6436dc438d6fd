//! # Hover-intent flyout menu
//!
//! `FlyoutMenuController` drives the category → subcategory flyouts of the
//! exercise filter sidebar. It is a plain state machine: the host forwards
//! pointer events, calls [`FlyoutMenuController::tick`] from its event loop,
//! and renders from the query methods.
//!
//! ```text
//!            enter trigger                 leave trigger / leave popup
//!  Closed ─────────────────▶ Open ─────────────────────────────▶ ClosePending
//!     ▲                       ▲  ◀──────────────────────────────────┘ │
//!     │                       │   enter popup / buffer-zone move /    │
//!     │                       │   re-enter same trigger               │
//!     └───────────────────────┴───────── timer fires ◀────────────────┘
//!         select item / close() / other trigger entered
//! ```
//!
//! Only one flyout is open at a time. Leaving the trigger never closes the
//! flyout immediately: a close timer (300 ms by default) starts, and moving
//! into the popup, or into the *buffer zone* in front of it, cancels that
//! timer. This is what lets the pointer travel diagonally from a trigger row
//! to its popup across other rows.
//!
//! While a session is open the controller asks the host for document-wide
//! pointer moves through the subscriber installed with
//! [`FlyoutMenuController::set_pointer_subscriber`]. The returned `Dispose`
//! is run on every way out of the session.

use std::rc::Rc;

use kinesis_core::{Clock, Dispose, Duration, Instant, Rect, Size, TimerKey, Timers, Vec2};
use serde::{Deserialize, Serialize};

use crate::menu::CategoryMenu;
use crate::position::{FlyoutPosition, PopupHeight, PositionerConfig, ViewportPositioner};

pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_BUFFER: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyoutConfig {
    pub close_delay: Duration,
    /// Width of the buffer zone in front of the popup, and how far it extends
    /// above and below it.
    pub buffer: f32,
    pub positioner: PositionerConfig,
    /// Viewport assumed until the host calls `set_viewport`.
    pub viewport: Size,
}

impl Default for FlyoutConfig {
    fn default() -> Self {
        Self {
            close_delay: DEFAULT_CLOSE_DELAY,
            buffer: DEFAULT_BUFFER,
            positioner: PositionerConfig::default(),
            viewport: Size::new(1280.0, 800.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlyoutState {
    Closed,
    Open,
    ClosePending,
}

/// What the user picked inside a flyout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The "All" row: the whole category, no subcategory filter.
    All,
    Sub(String),
}

impl Selection {
    /// The value handed to the selection callback; empty for `All`.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => "",
            Selection::Sub(s) => s,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Timeout,
    Selected,
    Forced,
    Replaced,
}

pub type SelectHandler = Box<dyn FnMut(&str, &str)>;
pub type PointerSubscriber = Box<dyn FnMut() -> Dispose>;

struct HoverSession {
    category: String,
    anchor: Rect,
    rows: usize,
    position: FlyoutPosition,
    measured: Option<Size>,
    pending_close: Option<TimerKey>,
    pointer_guard: Dispose,
}

pub struct FlyoutMenuController {
    menu: Rc<CategoryMenu>,
    config: FlyoutConfig,
    positioner: ViewportPositioner,
    clock: Rc<dyn Clock>,
    timers: Timers<String>,
    session: Option<HoverSession>,
    viewport: Size,
    on_select: Option<SelectHandler>,
    subscribe_pointer: Option<PointerSubscriber>,
}

impl FlyoutMenuController {
    pub fn new(menu: Rc<CategoryMenu>, clock: Rc<dyn Clock>) -> Self {
        Self::with_config(menu, clock, FlyoutConfig::default())
    }

    pub fn with_config(menu: Rc<CategoryMenu>, clock: Rc<dyn Clock>, config: FlyoutConfig) -> Self {
        Self {
            menu,
            positioner: ViewportPositioner::new(config.positioner),
            config,
            clock,
            timers: Timers::new(),
            session: None,
            viewport: config.viewport,
            on_select: None,
            subscribe_pointer: None,
        }
    }

    pub fn config(&self) -> &FlyoutConfig {
        &self.config
    }

    pub fn menu(&self) -> &Rc<CategoryMenu> {
        &self.menu
    }

    /// Replace the menu. The same `Rc` is treated as an unchanged menu; a new
    /// one closes the open flyout if its category is no longer openable.
    pub fn set_menu(&mut self, menu: Rc<CategoryMenu>) {
        if Rc::ptr_eq(&self.menu, &menu) {
            return;
        }
        self.menu = menu;
        let stale = self
            .session
            .as_ref()
            .is_some_and(|s| !self.menu.is_openable(&s.category));
        if stale {
            self.end_session(CloseReason::Forced);
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.reposition();
    }

    pub fn set_on_select(&mut self, handler: impl FnMut(&str, &str) + 'static) {
        self.on_select = Some(Box::new(handler));
    }

    /// Installs the hook that starts document-wide pointer tracking. It is
    /// called once per opened session; the `Dispose` it returns stops
    /// tracking and is run when that session ends.
    pub fn set_pointer_subscriber(&mut self, subscribe: impl FnMut() -> Dispose + 'static) {
        self.subscribe_pointer = Some(Box::new(subscribe));
    }

    pub fn on_enter_trigger(&mut self, category: &str, anchor: Rect) {
        let rows = match self.menu.subcategories(category) {
            Some(subs) if !subs.is_empty() => subs.len() + 1, // + "All"
            _ => {
                log::trace!("flyout: '{category}' has nothing to show");
                return;
            }
        };

        if let Some(session) = self.session.as_mut()
            && session.category == category
        {
            if let Some(key) = session.pending_close.take() {
                self.timers.cancel(key);
                log::debug!("flyout: close of '{category}' cancelled by trigger re-entry");
            }
            session.anchor = anchor;
            session.position = place(&self.positioner, session, self.viewport.height);
            return;
        }

        self.end_session(CloseReason::Replaced);

        let position = self
            .positioner
            .place(anchor, PopupHeight::Estimated(rows), self.viewport.height);
        let pointer_guard = match self.subscribe_pointer.as_mut() {
            Some(subscribe) => subscribe(),
            None => Dispose::noop(),
        };
        log::debug!(
            "flyout: open '{category}' at ({:.0}, {:.0})",
            position.x,
            position.y
        );
        self.session = Some(HoverSession {
            category: category.to_owned(),
            anchor,
            rows,
            position,
            measured: None,
            pending_close: None,
            pointer_guard,
        });
    }

    pub fn on_leave_trigger(&mut self) {
        self.schedule_close();
    }

    pub fn on_enter_popup(&mut self) {
        self.cancel_close();
    }

    pub fn on_leave_popup(&mut self) {
        self.schedule_close();
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        if self.in_buffer_zone(pointer) {
            log::trace!("flyout: pointer ({:.0}, {:.0}) in buffer zone", pointer.x, pointer.y);
            self.cancel_close();
        }
    }

    /// Picks the menu does not contain are ignored and leave the flyout as is.
    pub fn on_select_item(&mut self, category: &str, selection: Selection) {
        let known = match &selection {
            Selection::All => self.menu.contains(category),
            Selection::Sub(sub) => self.menu.contains_subcategory(category, sub),
        };
        if !known {
            log::debug!(
                "flyout: ignoring unknown pick '{category}' / '{}'",
                selection.as_str()
            );
            return;
        }
        self.end_session(CloseReason::Selected);
        log::debug!("flyout: selected '{category}' / '{}'", selection.as_str());
        if let Some(handler) = self.on_select.as_mut() {
            handler(category, selection.as_str());
        }
    }

    /// Close right away, ignoring any pending timer.
    pub fn close(&mut self) {
        self.end_session(CloseReason::Forced);
    }

    /// Fire due timers. Returns `true` if this closed the flyout.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut closed = false;
        for (key, category) in self.timers.take_due(now) {
            let owned = self
                .session
                .as_ref()
                .is_some_and(|s| s.pending_close == Some(key));
            if owned {
                if let Some(session) = self.session.as_mut() {
                    session.pending_close = None;
                }
                self.end_session(CloseReason::Timeout);
                closed = true;
            } else {
                log::trace!("flyout: dropping orphaned close timer for '{category}'");
            }
        }
        closed
    }

    /// Record the popup's laid-out size and re-clamp against it.
    pub fn set_popup_size(&mut self, size: Size) {
        if let Some(session) = self.session.as_mut() {
            session.measured = Some(size);
            session.position = place(&self.positioner, session, self.viewport.height);
        }
    }

    pub fn state(&self) -> FlyoutState {
        match &self.session {
            None => FlyoutState::Closed,
            Some(s) if s.pending_close.is_some() => FlyoutState::ClosePending,
            Some(_) => FlyoutState::Open,
        }
    }

    pub fn open_category(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.category.as_str())
    }

    pub fn is_open(&self, category: &str) -> bool {
        self.open_category() == Some(category)
    }

    pub fn anchor(&self) -> Option<Rect> {
        self.session.as_ref().map(|s| s.anchor)
    }

    pub fn position(&self) -> Option<FlyoutPosition> {
        self.session.as_ref().map(|s| s.position)
    }

    pub fn popup_rect(&self) -> Option<Rect> {
        self.session.as_ref().map(|s| popup_rect(&self.positioner, s))
    }

    pub fn is_tracking_pointer(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| !s.pointer_guard.is_disposed())
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// When the pending close fires, if one is pending.
    pub fn close_deadline(&self) -> Option<Instant> {
        let key = self.session.as_ref()?.pending_close?;
        self.timers.deadline(key)
    }

    /// The region in front of the popup where pointer presence keeps the
    /// flyout open: `buffer` pixels wide, ending at the popup's left edge,
    /// and `buffer` pixels taller than the popup at both ends.
    pub fn in_buffer_zone(&self, pointer: Vec2) -> bool {
        let Some(popup) = self.popup_rect() else {
            return false;
        };
        pointer.x < popup.left() && popup.expand(self.config.buffer).contains(pointer)
    }

    fn schedule_close(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(old) = session.pending_close.take() {
            self.timers.cancel(old);
        }
        let key = self.timers.schedule_after(
            self.clock.now(),
            self.config.close_delay,
            session.category.clone(),
        );
        session.pending_close = Some(key);
        log::debug!(
            "flyout: close of '{}' pending in {:?}",
            session.category,
            self.config.close_delay
        );
    }

    fn cancel_close(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.pending_close.take() {
            Some(key) => {
                self.timers.cancel(key);
                log::debug!("flyout: close of '{}' cancelled", session.category);
                true
            }
            None => false,
        }
    }

    fn reposition(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.position = place(&self.positioner, session, self.viewport.height);
        }
    }

    fn end_session(&mut self, reason: CloseReason) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(key) = session.pending_close {
            self.timers.cancel(key);
        }
        session.pointer_guard.run();
        log::debug!("flyout: closed '{}' ({reason:?})", session.category);
    }
}

impl Drop for FlyoutMenuController {
    fn drop(&mut self) {
        self.end_session(CloseReason::Forced);
    }
}

fn session_height(session: &HoverSession) -> PopupHeight {
    match session.measured {
        Some(size) => PopupHeight::Measured(size.height),
        None => PopupHeight::Estimated(session.rows),
    }
}

fn place(positioner: &ViewportPositioner, session: &HoverSession, viewport_height: f32) -> FlyoutPosition {
    positioner.place(session.anchor, session_height(session), viewport_height)
}

fn popup_rect(positioner: &ViewportPositioner, session: &HoverSession) -> Rect {
    let height = positioner.resolve_height(session_height(session));
    positioner.popup_rect(session.position, height, session.measured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinesis_core::ManualClock;
    use std::cell::{Cell, RefCell};

    fn menu() -> Rc<CategoryMenu> {
        Rc::new(CategoryMenu::from_pairs([
            ("Strength", vec!["Legs", "Arms", "Core"]),
            ("Mobility", vec!["Hip", "Shoulder"]),
            ("Empty", vec![]),
        ]))
    }

    fn controller() -> (FlyoutMenuController, ManualClock) {
        let clock = ManualClock::new();
        let mut c = FlyoutMenuController::new(menu(), Rc::new(clock.clone()));
        c.set_viewport(Size::new(1280.0, 900.0));
        (c, clock)
    }

    fn row(top: f32) -> Rect {
        Rect::new(0.0, top, 240.0, 40.0)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_enter_opens_at_computed_position() {
        let (mut c, _) = controller();
        c.on_enter_trigger("Strength", row(100.0));

        assert_eq!(c.state(), FlyoutState::Open);
        assert_eq!(c.open_category(), Some("Strength"));
        assert_eq!(c.position(), Some(FlyoutPosition { x: 250.0, y: 100.0 }));
        // 4 rows (3 + "All") * 36 + 56
        assert_eq!(c.popup_rect().unwrap().h, 200.0);
    }

    #[test]
    fn test_unknown_or_empty_categories_do_not_open() {
        let (mut c, _) = controller();
        c.on_enter_trigger("Nope", row(0.0));
        c.on_enter_trigger("Empty", row(0.0));
        assert_eq!(c.state(), FlyoutState::Closed);

        let mut empty = FlyoutMenuController::new(
            Rc::new(CategoryMenu::new()),
            Rc::new(ManualClock::new()),
        );
        empty.on_enter_trigger("Strength", row(0.0));
        empty.on_leave_trigger();
        empty.on_pointer_move(Vec2::new(0.0, 0.0));
        assert_eq!(empty.state(), FlyoutState::Closed);
    }

    #[test]
    fn test_leave_then_enter_popup_within_window_stays_open() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        let left_at = clock.now();
        c.on_leave_trigger();
        assert_eq!(c.state(), FlyoutState::ClosePending);
        assert_eq!(c.close_deadline(), Some(left_at + ms(300)));

        clock.advance(ms(100));
        assert!(!c.tick());
        c.on_enter_popup();
        assert_eq!(c.close_deadline(), None);

        clock.advance(ms(200));
        assert!(!c.tick());
        clock.advance(ms(500));
        assert!(!c.tick());
        assert_eq!(c.state(), FlyoutState::Open);
    }

    #[test]
    fn test_leave_without_cancel_closes_at_deadline_not_before() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        c.on_leave_trigger();

        clock.advance(ms(299));
        assert!(!c.tick());
        assert_eq!(c.state(), FlyoutState::ClosePending);

        clock.advance(ms(1));
        assert!(c.tick());
        assert_eq!(c.state(), FlyoutState::Closed);
        assert_eq!(c.position(), None);

        // stale pointer data after close is ignored
        let p = Vec2::new(240.0, 150.0);
        assert!(!c.in_buffer_zone(p));
        c.on_pointer_move(p);
        assert_eq!(c.state(), FlyoutState::Closed);
        assert!(!c.tick());
    }

    #[test]
    fn test_repeated_leave_replaces_the_timer() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        c.on_leave_trigger();
        clock.advance(ms(200));
        c.on_leave_popup();

        // first deadline (300ms) passes without closing
        clock.advance(ms(150));
        assert!(!c.tick());
        assert_eq!(c.state(), FlyoutState::ClosePending);

        clock.advance(ms(150));
        assert!(c.tick());
        assert_eq!(c.state(), FlyoutState::Closed);
    }

    #[test]
    fn test_buffer_zone_move_cancels_close() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        // popup left = 250, top = 100, bottom = 300
        c.on_leave_trigger();

        clock.advance(ms(50));
        c.on_pointer_move(Vec2::new(235.0, 330.0));
        assert_eq!(c.state(), FlyoutState::Open);

        clock.advance(ms(1000));
        assert!(!c.tick());
        assert_eq!(c.state(), FlyoutState::Open);
    }

    #[test]
    fn test_buffer_zone_bounds() {
        let (mut c, _) = controller();
        c.on_enter_trigger("Strength", row(100.0));

        assert!(c.in_buffer_zone(Vec2::new(220.0, 100.0)));
        assert!(c.in_buffer_zone(Vec2::new(249.0, 70.0)));
        assert!(c.in_buffer_zone(Vec2::new(249.0, 330.0)));
        // too far left, above, below
        assert!(!c.in_buffer_zone(Vec2::new(219.0, 150.0)));
        assert!(!c.in_buffer_zone(Vec2::new(240.0, 69.0)));
        assert!(!c.in_buffer_zone(Vec2::new(240.0, 331.0)));
        // on or past the popup's left edge is the popup, not the buffer
        assert!(!c.in_buffer_zone(Vec2::new(250.0, 150.0)));
    }

    #[test]
    fn test_move_outside_buffer_leaves_timer_running() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        c.on_leave_trigger();
        c.on_pointer_move(Vec2::new(100.0, 600.0));

        clock.advance(ms(300));
        assert!(c.tick());
        assert_eq!(c.state(), FlyoutState::Closed);
    }

    #[test]
    fn test_opening_another_category_discards_the_first() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        c.on_leave_trigger();

        clock.advance(ms(100));
        c.on_enter_trigger("Mobility", row(140.0));
        assert_eq!(c.open_category(), Some("Mobility"));
        assert_eq!(c.state(), FlyoutState::Open);

        // Strength's timer would have fired here
        clock.advance(ms(400));
        assert!(!c.tick());
        assert!(c.is_open("Mobility"));
        assert!(c.next_deadline().is_none());
    }

    #[test]
    fn test_reentering_same_trigger_cancels_close_and_moves_anchor() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        c.on_leave_trigger();
        c.on_enter_trigger("Strength", row(750.0));

        assert_eq!(c.state(), FlyoutState::Open);
        // 200 high popup at 750 would overflow 900: 900 - 200 - 20
        assert_eq!(c.position().unwrap().y, 680.0);

        clock.advance(ms(300));
        assert!(!c.tick());
    }

    #[test]
    fn test_select_item_closes_and_reports() {
        let (mut c, _) = controller();
        let picks = Rc::new(RefCell::new(Vec::new()));
        {
            let picks = picks.clone();
            c.set_on_select(move |cat, sub| picks.borrow_mut().push((cat.to_owned(), sub.to_owned())));
        }

        c.on_enter_trigger("Strength", row(100.0));
        c.on_leave_trigger();
        c.on_select_item("Strength", Selection::Sub("Legs".into()));
        assert_eq!(c.state(), FlyoutState::Closed);
        assert!(c.next_deadline().is_none());

        c.on_enter_trigger("Mobility", row(140.0));
        c.on_select_item("Mobility", Selection::All);

        // picks outside the menu do nothing
        c.on_enter_trigger("Strength", row(100.0));
        c.on_select_item("Strength", Selection::Sub("Neck".into()));
        c.on_select_item("Cardio", Selection::All);
        assert!(c.is_open("Strength"));

        assert_eq!(
            *picks.borrow(),
            vec![
                ("Strength".to_owned(), "Legs".to_owned()),
                ("Mobility".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn test_forced_close_ignores_pending_timer() {
        let (mut c, clock) = controller();
        c.on_enter_trigger("Strength", row(100.0));
        c.on_leave_trigger();
        c.close();
        assert_eq!(c.state(), FlyoutState::Closed);

        clock.advance(ms(300));
        assert!(!c.tick());
    }

    fn tracked() -> (FlyoutMenuController, ManualClock, Rc<Cell<i32>>) {
        let (mut c, clock) = controller();
        let live = Rc::new(Cell::new(0));
        {
            let live = live.clone();
            c.set_pointer_subscriber(move || {
                live.set(live.get() + 1);
                let live = live.clone();
                Dispose::new(move || live.set(live.get() - 1))
            });
        }
        (c, clock, live)
    }

    #[test]
    fn test_pointer_tracking_follows_session_lifetime() {
        let (mut c, clock, live) = tracked();

        c.on_enter_trigger("Strength", row(100.0));
        assert_eq!(live.get(), 1);
        assert!(c.is_tracking_pointer());

        // switching categories stops the old subscription before starting one
        c.on_enter_trigger("Mobility", row(140.0));
        assert_eq!(live.get(), 1);

        // same category does not subscribe twice
        c.on_enter_trigger("Mobility", row(140.0));
        assert_eq!(live.get(), 1);

        c.on_leave_trigger();
        clock.advance(ms(300));
        c.tick();
        assert_eq!(live.get(), 0);
        assert!(!c.is_tracking_pointer());

        c.on_enter_trigger("Strength", row(100.0));
        c.close();
        assert_eq!(live.get(), 0);

        c.on_enter_trigger("Strength", row(100.0));
        c.on_select_item("Strength", Selection::All);
        assert_eq!(live.get(), 0);

        c.on_enter_trigger("Strength", row(100.0));
        drop(c);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_menu_swap_closes_vanished_category() {
        let (mut c, _, live) = tracked();
        c.on_enter_trigger("Strength", row(100.0));

        let same = c.menu().clone();
        c.set_menu(same);
        assert!(c.is_open("Strength"));

        c.set_menu(Rc::new(CategoryMenu::from_pairs([("Mobility", vec!["Hip"])])));
        assert_eq!(c.state(), FlyoutState::Closed);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_measured_size_reclamps() {
        let (mut c, _) = controller();
        c.on_enter_trigger("Mobility", row(600.0));
        // estimate: 3 * 36 + 56 = 164 fits under 900
        assert_eq!(c.position().unwrap().y, 600.0);

        c.set_popup_size(Size::new(260.0, 400.0));
        assert_eq!(c.position().unwrap().y, 480.0);
        let rect = c.popup_rect().unwrap();
        assert_eq!((rect.w, rect.h), (260.0, 400.0));
    }

    #[test]
    fn test_viewport_change_repositions() {
        let (mut c, _) = controller();
        c.on_enter_trigger("Strength", row(500.0));
        assert_eq!(c.position().unwrap().y, 500.0);

        c.set_viewport(Size::new(1280.0, 600.0));
        assert_eq!(c.position().unwrap().y, 600.0 - 200.0 - 20.0);
    }

    #[test]
    fn test_config_from_json() {
        let cfg: FlyoutConfig = serde_json::from_str(
            r#"{
                "close_delay": { "secs": 0, "nanos": 500000000 },
                "buffer": 40,
                "viewport": { "width": 1024, "height": 600 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.close_delay, ms(500));
        assert_eq!(cfg.buffer, 40.0);
        assert_eq!(cfg.positioner, PositionerConfig::default());

        // the configured viewport is used until the host reports one
        let mut c = FlyoutMenuController::with_config(menu(), Rc::new(ManualClock::new()), cfg);
        c.on_enter_trigger("Strength", row(500.0));
        assert_eq!(c.position().unwrap().y, 600.0 - 200.0 - 20.0);
    }
}
