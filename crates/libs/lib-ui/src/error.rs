//! # Error Handling
//!
//! [`UiError`] is the single error type of the page helpers. It only covers
//! failures of the host document itself: an empty required field or a
//! missing form are ordinary outcomes and are reported through
//! [`FormReport`](crate::validator::FormReport) instead.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_ui::error::{Result, UiError};
//!
//! fn lifetime_ms(raw: u32) -> Result<u32> {
//!     if raw == 0 {
//!         return Err(UiError::Config("notice lifetime must be positive".to_string()));
//!     }
//!     Ok(raw)
//! }
//!
//! assert!(lifetime_ms(0).is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, UiError>`.
pub type Result<T> = std::result::Result<T, UiError>;

/// Errors raised while mutating the host document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The document has no `<body>` to attach notices to.
    #[error("Document has no body element")]
    MissingBody,

    /// A DOM call was rejected by the host (stringified `JsValue` in the browser).
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}
