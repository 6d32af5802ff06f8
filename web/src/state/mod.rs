//! Page-wide helper state

pub mod helpers;

pub use helpers::with_helpers;
