use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::{Dispose, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
    Enter,
    Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn mouse(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Mouse,
            event,
            position,
        }
    }

    pub fn touch(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Touch,
            event,
            position,
        }
    }
}

new_key_type! {
    struct ListenerKey;
}

type Listener = Rc<dyn Fn(Vec2)>;

/// Document-wide pointer-move broadcast.
///
/// Hosts forward every pointer move here; widgets that need global tracking
/// (the flyout buffer zone) subscribe only while they are open and drop the
/// returned [`Dispose`] to stop.
#[derive(Clone, Default)]
pub struct PointerFeed {
    listeners: Rc<RefCell<SlotMap<ListenerKey, Listener>>>,
}

impl PointerFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, f: impl Fn(Vec2) + 'static) -> Dispose {
        let key = self.listeners.borrow_mut().insert(Rc::new(f));
        let weak = Rc::downgrade(&self.listeners);
        Dispose::new(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.borrow_mut().remove(key);
            }
        })
    }

    /// Listeners are snapshotted first, so a listener may unsubscribe itself
    /// (or others) while being notified.
    pub fn emit(&self, position: Vec2) {
        let snapshot: SmallVec<[Listener; 4]> =
            self.listeners.borrow().values().cloned().collect();
        for listener in snapshot {
            listener(position);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}
