//! `setTimeout` backed [`Scheduler`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use lib_ui::schedule::{delay_millis, Callback, Scheduler, TimerHandle};

/// Schedules callbacks on the window's timer queue.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Timer = BrowserTimer;

    fn schedule(&self, delay: Duration, callback: Callback) -> BrowserTimer {
        let fired = FiredFlag::default();
        let callback = fired.wrap(callback);
        BrowserTimer {
            timeout: Some(Timeout::new(delay_millis(delay), callback)),
            fired,
        }
    }
}

/// Set by a timer callback once it has run.
#[derive(Clone, Debug, Default)]
pub struct FiredFlag(Rc<Cell<bool>>);

impl FiredFlag {
    /// Wrap `callback` so running it marks this flag.
    pub fn wrap(&self, callback: Callback) -> impl FnOnce() + 'static {
        let flag = self.0.clone();
        move || {
            flag.set(true);
            callback();
        }
    }

    pub fn has_fired(&self) -> bool {
        self.0.get()
    }
}

/// Pending `setTimeout`.
///
/// A gloo [`Timeout`] clears itself when dropped, so dropping this handle
/// while the timeout is pending forgets it instead and leaves it armed.
/// Once it has fired the `Timeout` is dropped normally to free its closure.
pub struct BrowserTimer {
    timeout: Option<Timeout>,
    fired: FiredFlag,
}

impl TimerHandle for BrowserTimer {
    fn cancel(mut self) {
        if let Some(timeout) = self.timeout.take() {
            drop(timeout.cancel());
        }
    }
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        if let Some(timeout) = self.timeout.take() {
            if !self.fired.has_fired() {
                let _ = timeout.forget();
            }
        }
    }
}
