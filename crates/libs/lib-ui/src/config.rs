//! # Page Helper Configuration
//!
//! [`UiConfig`] holds the constants the helpers apply to the page: how long a
//! notice stays up, the CSS class family of notices, the border colours of
//! validated fields and the selector used to find required fields.
//!
//! ## Global Config Access
//!
//! The host installs a configuration once at startup with [`init_config()`]
//! and everything else reads it through [`ui_config()`]:
//!
//! ```rust
//! use lib_ui::config::ui_config;
//!
//! let config = ui_config();
//! assert_eq!(config.notice_lifetime_ms, 5000);
//! ```
//!
//! Unlike a server config there is no environment to read in the browser, so
//! [`ui_config()`] falls back to [`UiConfig::default()`] when nothing was
//! installed.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, UiError};

/// Lifetime of a notice before it removes itself.
pub const DEFAULT_NOTICE_LIFETIME_MS: u32 = 5000;
/// Border colour of a required field left empty.
pub const INVALID_BORDER_COLOR: &str = "#e53e3e";
/// Border colour of a required field that has a value.
pub const VALID_BORDER_COLOR: &str = "#e2e8f0";
/// Fields inspected by the form validator.
pub const REQUIRED_FIELDS_SELECTOR: &str = "input[required], select[required]";
/// Base CSS class of notices; the severity class is `<base>-<severity>`.
pub const NOTICE_CLASS: &str = "alert";

/// Page helper configuration.
///
/// Every field has a default, so a partial object passed from JavaScript only
/// overrides what it names.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Milliseconds before a notice removes itself
    pub notice_lifetime_ms: u32,

    /// Base CSS class of notice banners
    pub notice_class: String,

    /// Inline border colour for empty required fields
    pub invalid_border: String,

    /// Inline border colour for filled required fields
    pub valid_border: String,

    /// CSS selector for required fields, evaluated below the form element
    pub required_selector: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_lifetime_ms: DEFAULT_NOTICE_LIFETIME_MS,
            notice_class: NOTICE_CLASS.to_string(),
            invalid_border: INVALID_BORDER_COLOR.to_string(),
            valid_border: VALID_BORDER_COLOR.to_string(),
            required_selector: REQUIRED_FIELDS_SELECTOR.to_string(),
        }
    }
}

impl UiConfig {
    /// Notice lifetime as a [`Duration`].
    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.notice_lifetime_ms))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.notice_lifetime_ms == 0 {
            return Err(UiError::Config("noticeLifetimeMs must be greater than 0".to_string()));
        }

        let text_fields = [
            ("noticeClass", &self.notice_class),
            ("invalidBorder", &self.invalid_border),
            ("validBorder", &self.valid_border),
            ("requiredSelector", &self.required_selector),
        ];
        for (name, value) in text_fields {
            if value.trim().is_empty() {
                return Err(UiError::Config(format!("{} cannot be empty", name)));
            }
        }

        if self.notice_class.split_whitespace().count() != 1 {
            return Err(UiError::Config("noticeClass must be a single class name".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// Install the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails [`UiConfig::validate`]
/// - A configuration was already installed or already read through [`ui_config()`]
pub fn init_config(config: UiConfig) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| UiError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration, defaulting it on first use.
pub fn ui_config() -> &'static UiConfig {
    CONFIG.get_or_init(UiConfig::default)
}
