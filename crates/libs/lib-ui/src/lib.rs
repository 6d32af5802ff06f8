//! # Page Helpers Library
//!
//! Browser-independent core of the User Management System page helpers.
//!
//! ## Structure
//!
//! - **[`notifier`]**: transient alert banners inserted at the top of the body
//! - **[`validator`]**: required-field checks for forms, with visual marking
//! - **[`dom`]** / **[`schedule`]**: the capabilities both need from the host
//! - **[`config`]**: colours, classes and timings applied to the page
//! - **[`error`]**: [`UiError`] and the crate `Result` alias
//! - **[`testing`]**: in-memory document and manual clock
//!
//! The `web` crate implements [`dom::Document`] and [`schedule::Scheduler`] on
//! top of `web-sys` and exposes the helpers to page scripts.
//!
//! ## Usage
//!
//! ```rust
//! use lib_ui::config::UiConfig;
//! use lib_ui::testing::MemoryDocument;
//! use lib_ui::validator::FormValidator;
//!
//! let document = MemoryDocument::new();
//! let form = document.add_form("add-user");
//! document.add_field(form, "input", "first_name", "  ", true);
//!
//! let validator = FormValidator::new(document, &UiConfig::default());
//! assert!(!validator.is_valid("add-user").unwrap());
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod notifier;
pub mod schedule;
pub mod severity;
pub mod testing;
pub mod validator;

pub use config::{init_config, ui_config, UiConfig};
pub use error::{Result, UiError};
pub use notifier::{Notice, Notifier};
pub use severity::Severity;
pub use validator::{FieldCheck, FieldState, FormReport, FormValidator};

/// Message logged once when the helpers are initialized.
pub const STARTUP_MESSAGE: &str = "User Management System loaded";
