//! Deterministic scheduler driven by the test.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::schedule::{Callback, Scheduler, TimerHandle};

struct Pending {
    id: u64,
    due: Duration,
    callback: Callback,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

/// Scheduler whose time only moves through [`ManualClock::advance`].
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers still armed.
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move time forward, firing due timers in (due time, scheduling order).
    ///
    /// Callbacks may schedule new timers; those fire in the same call if they
    /// fall due before the new current time.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;

        while let Some(pending) = self.pop_due(target) {
            self.state.borrow_mut().now = pending.due;
            (pending.callback)();
        }

        self.state.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Pending> {
        let mut state = self.state.borrow_mut();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(index, _)| index)?;
        Some(state.pending.remove(index))
    }
}

impl Scheduler for ManualClock {
    type Timer = ManualTimer;

    fn schedule(&self, delay: Duration, callback: Callback) -> ManualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.pending.push(Pending { id, due, callback });

        ManualTimer {
            id,
            clock: Rc::downgrade(&self.state),
        }
    }
}

/// Handle to a timer armed on a [`ManualClock`].
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        if let Some(state) = self.clock.upgrade() {
            state.borrow_mut().pending.retain(|p| p.id != self.id);
        }
    }
}
