//! User Management System page helpers for the browser
//!
//! Exposes the alert and form-validation helpers to page scripts:
//!
//! ```js
//! import init, { showAlert, validateForm } from './pkg/usermgmt_web.js';
//!
//! await init();
//! form.addEventListener('submit', (event) => {
//!     if (!validateForm('add-user-form')) {
//!         event.preventDefault();
//!         showAlert('Please fill in all required fields', 'error');
//!     }
//! });
//! ```

use std::sync::Once;

use lib_ui::{Severity, UiConfig, STARTUP_MESSAGE};
use wasm_bindgen::prelude::*;

mod services;
mod state;
mod utils;

pub use services::{BrowserDocument, BrowserScheduler, BrowserTimer};

use state::with_helpers;
use utils::js::to_js_error;

static INIT: Once = Once::new();

#[wasm_bindgen(start)]
pub fn main() {
    init();
}

/// Startup hook: panic hook, logger and the one-time load message.
///
/// Runs automatically when the module is instantiated. Returns `true` only
/// for the call that performed the startup; later calls are no-ops.
pub fn init() -> bool {
    let mut started = false;
    INIT.call_once(|| {
        install_console_hooks();
        log::info!("{}", STARTUP_MESSAGE);
        started = true;
    });
    started
}

#[cfg(target_arch = "wasm32")]
fn install_console_hooks() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
}

// Native test builds have no browser console to write to.
#[cfg(not(target_arch = "wasm32"))]
fn install_console_hooks() {}

/// Override helper settings. Must run before the first alert or validation.
///
/// Accepts a partial object, e.g. `{ noticeLifetimeMs: 3000 }`.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config: UiConfig = serde_wasm_bindgen::from_value(options)?;
    lib_ui::init_config(config).map_err(|e| {
        log::error!("configure: {}", e);
        to_js_error(&e)
    })
}

/// Show `message` at the top of the page for a few seconds.
///
/// `kind` defaults to `success`. Never throws; failures go to the console.
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: &str, kind: Option<String>) {
    let severity = kind.map(Severity::from).unwrap_or_default();

    match with_helpers(|helpers| helpers.show(message, severity)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) | Err(e) => log::error!("showAlert failed: {}", e),
    }
}

/// Remove every alert still on screen and cancel their timers.
#[wasm_bindgen(js_name = dismissAlerts)]
pub fn dismiss_alerts() -> usize {
    with_helpers(|helpers| helpers.dismiss_all()).unwrap_or_else(|e| {
        log::error!("dismissAlerts failed: {}", e);
        0
    })
}

/// Check the required fields of the form with id `form_id`.
///
/// Returns `true` when every required field has a value, and also when no
/// form has that id or the document could not be inspected. A field whose
/// style update is rejected does not stop the others from being marked.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    match with_helpers(|helpers| helpers.validate(form_id)) {
        Ok(Ok(report)) => report.is_valid(),
        Ok(Err(e)) | Err(e) => {
            log::error!("validateForm('{}') failed, allowing submit: {}", form_id, e);
            true
        }
    }
}

/// Like [`validate_form`] but returns the per-field report as a plain object.
#[wasm_bindgen(js_name = validateFormReport)]
pub fn validate_form_report(form_id: &str) -> Result<JsValue, JsValue> {
    let report = with_helpers(|helpers| helpers.validate(form_id))
        .and_then(|result| result)
        .map_err(|e| to_js_error(&e))?;
    Ok(serde_wasm_bindgen::to_value(&report)?)
}
