//! Conversions between `JsValue` errors and [`UiError`].

use lib_ui::UiError;
use wasm_bindgen::JsValue;

/// Turn a rejected DOM call into a [`UiError::Dom`].
///
/// DOM exceptions are objects, not strings, so fall back to their debug form.
pub fn dom_error(value: JsValue) -> UiError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    UiError::Dom(message)
}

/// Error handed back to page scripts.
pub fn to_js_error(error: &UiError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
