//! Cooperative, cancellable one-shot timers.
//!
//! `Timers<T>` does not spawn anything. The owner schedules deadlines, cancels
//! them synchronously, and drains the due ones from its event loop with
//! [`Timers::take_due`]. Keys are generational, so a stale key can never
//! cancel or be confused with a timer scheduled later in the same slot.

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::clock::{Duration, Instant};

new_key_type! {
    /// Handle to a scheduled timer.
    pub struct TimerKey;
}

struct Entry<T> {
    deadline: Instant,
    payload: T,
}

pub type Due<T> = SmallVec<[(TimerKey, T); 4]>;

pub struct Timers<T> {
    entries: SlotMap<TimerKey, Entry<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    pub fn schedule(&mut self, deadline: Instant, payload: T) -> TimerKey {
        self.entries.insert(Entry { deadline, payload })
    }

    pub fn schedule_after(&mut self, now: Instant, delay: Duration, payload: T) -> TimerKey {
        self.schedule(now + delay, payload)
    }

    /// Returns the payload if the timer was still pending.
    pub fn cancel(&mut self, key: TimerKey) -> Option<T> {
        self.entries.remove(key).map(|e| e.payload)
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn deadline(&self, key: TimerKey) -> Option<Instant> {
        self.entries.get(key).map(|e| e.deadline)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().map(|e| e.deadline).min()
    }

    /// Remove and return every timer whose deadline is at or before `now`,
    /// earliest first. A returned key is no longer pending, so each timer
    /// fires at most once.
    pub fn take_due(&mut self, now: Instant) -> Due<T> {
        let mut keys: SmallVec<[(Instant, TimerKey); 4]> = self
            .entries
            .iter()
            .filter(|(_, e)| e.deadline <= now)
            .map(|(k, e)| (e.deadline, k))
            .collect();
        keys.sort_by_key(|(deadline, _)| *deadline);

        keys.into_iter()
            .filter_map(|(_, k)| self.entries.remove(k).map(|e| (k, e.payload)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
