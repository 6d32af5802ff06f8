//! # Deferred Callbacks
//!
//! One-shot timers behind a trait so the page uses `setTimeout` and tests
//! drive time by hand with [`ManualClock`](crate::testing::ManualClock).
//!
//! Dropping a [`TimerHandle`] must leave the timer armed: notices are
//! fire-and-forget unless the caller explicitly cancels.

use std::time::Duration;

/// Callback run once when a timer fires.
pub type Callback = Box<dyn FnOnce() + 'static>;

/// Schedules one-shot callbacks on the host's event loop.
pub trait Scheduler: Clone + 'static {
    type Timer: TimerHandle;

    /// Run `callback` once after `delay`. Never blocks the caller.
    fn schedule(&self, delay: Duration, callback: Callback) -> Self::Timer;
}

/// Handle to a pending timer.
pub trait TimerHandle: 'static {
    /// Prevent the callback from running. No-op if it already ran.
    fn cancel(self);
}

/// Longest delay `setTimeout` honours; larger values fire immediately.
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// Clamp a duration to the millisecond range accepted by `setTimeout`.
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}
