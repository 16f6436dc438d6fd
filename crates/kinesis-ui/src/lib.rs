//! # Kinesis widgets
//!
//! State machines behind the exercise browser's interactive widgets. None of
//! them render anything: the host forwards events (pointer enter/leave/move,
//! clicks, timer ticks, video element notifications), then draws from the
//! query methods.
//!
//! - [`position`]: where a popup goes next to its trigger, kept inside the
//!   viewport vertically.
//! - [`flyout`]: hover-intent category → subcategory flyouts with a debounced
//!   close and a buffer zone for diagonal pointer travel.
//! - [`sidebar`]: the filter sidebar that combines direct category clicks with
//!   flyout picks.
//! - [`carousel`]: ordered image/video slides with exclusive playback.
//! - [`gestures`]: tap/swipe detection for touch carousels.
//!
//! ## Wiring a flyout
//!
//! ```rust
//! use kinesis_core::prelude::*;
//! use kinesis_ui::prelude::*;
//! use std::rc::Rc;
//!
//! let clock = ManualClock::new();
//! let menu = Rc::new(CategoryMenu::from_pairs([("Strength", ["Legs", "Arms"])]));
//! let mut flyout = FlyoutMenuController::new(menu, Rc::new(clock.clone()));
//! flyout.set_viewport(Size::new(1280.0, 900.0));
//!
//! flyout.on_enter_trigger("Strength", Rect::new(0.0, 100.0, 240.0, 40.0));
//! flyout.on_leave_trigger();
//!
//! // pointer heads for the popup; the buffer zone keeps it open
//! flyout.on_pointer_move(Vec2::new(235.0, 140.0));
//! clock.advance(Duration::from_millis(300));
//! flyout.tick();
//! assert_eq!(flyout.state(), FlyoutState::Open);
//!
//! flyout.on_leave_popup();
//! clock.advance(Duration::from_millis(300));
//! flyout.tick();
//! assert_eq!(flyout.state(), FlyoutState::Closed);
//! ```

pub mod carousel;
pub mod flyout;
pub mod gestures;
pub mod menu;
pub mod position;
pub mod sidebar;

pub mod prelude {
    pub use crate::carousel::{
        CarouselConfig, CarouselController, MediaEvent, MediaItem, MediaKind, MediaPlayer,
        MediaSequence, MediaSource, NullPlayer, PlaybackFlags,
    };
    pub use crate::flyout::{
        FlyoutConfig, FlyoutMenuController, FlyoutState, Selection, DEFAULT_BUFFER,
        DEFAULT_CLOSE_DELAY,
    };
    pub use crate::gestures::{Gesture, SwipeDetector, SwipeDirection};
    pub use crate::menu::{Category, CategoryMenu, MenuError};
    pub use crate::position::{
        FlyoutPosition, PopupHeight, PositionerConfig, ViewportPositioner, compute_position,
    };
    pub use crate::sidebar::{ActiveFilter, CategorySidebar};
}
