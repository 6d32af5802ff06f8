//! # In-Memory Host
//!
//! A DOM tree and a clock that live entirely in Rust, so the notifier and the
//! validator can be exercised without a browser:
//!
//! - [`MemoryDocument`] implements [`Document`](crate::dom::Document)
//! - [`ManualClock`] implements [`Scheduler`](crate::schedule::Scheduler) and only
//!   moves when [`ManualClock::advance`] is called

mod clock;
mod memory;

pub use clock::{ManualClock, ManualTimer};
pub use memory::{MemoryDocument, NodeId};
