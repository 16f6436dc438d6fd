pub use crate::clock::{Clock, Duration, Instant, ManualClock, SystemClock, system_clock};
pub use crate::effects::Dispose;
pub use crate::error::PlaybackError;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::input::{
    PointerButton, PointerEvent, PointerEventKind, PointerFeed, PointerId, PointerKind,
};
pub use crate::timer::{TimerKey, Timers};
