//! Small interop helpers

pub mod js;
