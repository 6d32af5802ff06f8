//! Browser implementations of the page helper capabilities

pub mod document;
pub mod timer;

pub use document::BrowserDocument;
pub use timer::{BrowserScheduler, BrowserTimer};
