//! # Time, Timers, and Subscriptions
//!
//! The Kinesis widgets are plain state machines driven by discrete host
//! events. This crate holds the plumbing they share:
//!
//! - `Rect` / `Vec2` / `Size`: screen geometry in pixels.
//! - `Clock`: where "now" comes from (`SystemClock`, or `ManualClock` in tests).
//! - `Timers<T>`: cooperative one-shot timers with cancellable keys.
//! - `Dispose`: run-once cleanup guard returned by subscriptions.
//! - `PointerFeed`: document-wide pointer-move broadcast.
//!
//! ## Timers
//!
//! Nothing runs in the background. The owner schedules a deadline, keeps the
//! `TimerKey`, and drains due timers from its own loop:
//!
//! ```rust
//! use kinesis_core::prelude::*;
//!
//! let clock = ManualClock::new();
//! let mut timers = Timers::new();
//!
//! let key = timers.schedule_after(clock.now(), Duration::from_millis(300), "close");
//! clock.advance(Duration::from_millis(299));
//! assert!(timers.take_due(clock.now()).is_empty());
//!
//! clock.advance(Duration::from_millis(1));
//! let due = timers.take_due(clock.now());
//! assert_eq!(due.len(), 1);
//! assert_eq!(due[0], (key, "close"));
//! assert!(!timers.is_pending(key));
//! ```
//!
//! Cancelling is synchronous, so any event processed before the deadline can
//! still stop the timer.
//!
//! ## Subscriptions and cleanup
//!
//! `PointerFeed::subscribe` hands back a `Dispose`. Running it removes the
//! listener; running it again does nothing.
//!
//! ```rust
//! use kinesis_core::prelude::*;
//! use std::{cell::Cell, rc::Rc};
//!
//! let feed = PointerFeed::new();
//! let seen = Rc::new(Cell::new(0));
//!
//! let guard = {
//!     let seen = seen.clone();
//!     feed.subscribe(move |_| seen.set(seen.get() + 1))
//! };
//! feed.emit(Vec2::new(10.0, 10.0));
//! guard.run();
//! guard.run();
//! feed.emit(Vec2::new(20.0, 20.0));
//!
//! assert_eq!(seen.get(), 1);
//! assert_eq!(feed.listener_count(), 0);
//! ```

pub mod clock;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod timer;

pub use clock::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use timer::*;
