//! # Form Validator
//!
//! Checks that the required fields of a form are filled in before submission.
//!
//! For the form with the given id, every descendant matching the required
//! field selector (`input[required], select[required]` by default) is trimmed
//! and classified. Empty fields get the invalid border colour, filled fields
//! get the neutral one, which also clears a previous invalid mark.
//!
//! A form id that matches nothing validates as `true`. Pages call this from
//! submit handlers, and a misnamed form must not lock the user out; the miss
//! is logged at `warn` so it still shows up in the console.

use serde::Serialize;

use crate::config::UiConfig;
use crate::dom::Document;
use crate::error::Result;

/// Outcome for one required field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Valid,
    Invalid,
}

/// A required field as seen during one validation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCheck {
    /// `id` attribute of the field, empty when it has none
    pub id: String,
    /// Lowercase tag name (`input` or `select`)
    pub tag: String,
    /// Trimmed value at call time
    pub value: String,
    pub state: FieldState,
    /// Inline `border-color` applied to the field
    pub border_color: String,
}

/// Result of validating one form, including the styling applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub form_id: String,
    /// `false` when no element had the requested id
    pub found: bool,
    pub fields: Vec<FieldCheck>,
}

impl FormReport {
    fn missing(form_id: &str) -> Self {
        Self {
            form_id: form_id.to_string(),
            found: false,
            fields: Vec::new(),
        }
    }

    /// True iff no required field was empty (vacuously true for a missing form).
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| field.state == FieldState::Valid)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldCheck> {
        self.fields.iter().filter(|field| field.state == FieldState::Invalid)
    }
}

/// ECMAScript WhiteSpace and LineTerminator code points. Unlike
/// `char::is_whitespace` this includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Trim exactly like `String.prototype.trim`.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Validates required fields of forms in a document.
#[derive(Clone)]
pub struct FormValidator<D> {
    document: D,
    selector: String,
    invalid_border: String,
    valid_border: String,
}

impl<D: Document> FormValidator<D> {
    pub fn new(document: D, config: &UiConfig) -> Self {
        Self {
            document,
            selector: config.required_selector.clone(),
            invalid_border: config.invalid_border.clone(),
            valid_border: config.valid_border.clone(),
        }
    }

    /// Validate the form with id `form_id`, styling each required field.
    ///
    /// Empty fields are not errors; they show up as [`FieldState::Invalid`]
    /// entries in the report.
    ///
    /// # Errors
    ///
    /// [`UiError::Dom`](crate::error::UiError::Dom) if the host rejects the
    /// selector or a style update. A rejected style update does not stop the
    /// pass: every other field is still marked before the first error is returned.
    pub fn validate(&self, form_id: &str) -> Result<FormReport> {
        let Some(form) = self.document.get_element_by_id(form_id) else {
            log::warn!("validate_form: no element with id '{}', treating as valid", form_id);
            return Ok(FormReport::missing(form_id));
        };

        let fields = self.document.query_selector_all(&form, &self.selector)?;
        let mut checks = Vec::with_capacity(fields.len());
        let mut style_error = None;

        for field in &fields {
            let raw = self.document.value(field);
            let value = trim_value(&raw);

            let (state, border_color) = if value.is_empty() {
                (FieldState::Invalid, &self.invalid_border)
            } else {
                (FieldState::Valid, &self.valid_border)
            };
            // Keep marking the remaining fields; report the first failure afterwards.
            if let Err(e) = self
                .document
                .set_style_property(field, "border-color", border_color)
            {
                style_error.get_or_insert(e);
            }

            checks.push(FieldCheck {
                id: self.document.id(field),
                tag: self.document.tag_name(field),
                value: value.to_string(),
                state,
                border_color: border_color.clone(),
            });
        }

        if let Some(e) = style_error {
            return Err(e);
        }

        let report = FormReport {
            form_id: form_id.to_string(),
            found: true,
            fields: checks,
        };
        log::debug!(
            "validate_form('{}'): {} required, {} empty",
            form_id,
            report.fields.len(),
            report.invalid_fields().count()
        );

        Ok(report)
    }

    /// Shorthand for `validate(form_id)?.is_valid()`.
    pub fn is_valid(&self, form_id: &str) -> Result<bool> {
        Ok(self.validate(form_id)?.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryDocument;

    fn validator(document: &MemoryDocument) -> FormValidator<MemoryDocument> {
        FormValidator::new(document.clone(), &UiConfig::default())
    }

    #[test]
    fn test_trim_value() {
        assert_eq!(trim_value("  x  "), "x");
        assert_eq!(trim_value("\t\n\u{a0}"), "");
        assert_eq!(trim_value("\u{feff}"), "");
        assert_eq!(trim_value(" a b "), "a b");
        assert_eq!(trim_value("\u{2003}\u{3000}x\u{2029}"), "x");
        assert_eq!(trim_value("\u{85}"), "\u{85}");
        assert_eq!(trim_value("\u{200b}"), "\u{200b}");
    }

    #[test]
    fn test_next_line_counts_as_value() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        let field = document.add_field(form, "input", "name", "\u{85}", true);

        let report = validator(&document).validate("f").unwrap();

        assert!(report.is_valid());
        assert_eq!(document.style(field, "border-color").as_deref(), Some("#e2e8f0"));
    }

    #[test]
    fn test_mixed_fields() {
        let document = MemoryDocument::new();
        let form = document.add_form("signup");
        let a = document.add_field(form, "input", "a", "", true);
        let b = document.add_field(form, "input", "b", "x", true);

        let report = validator(&document).validate("signup").unwrap();

        assert!(!report.is_valid());
        assert!(report.found);
        assert_eq!(document.style(a, "border-color").as_deref(), Some("#e53e3e"));
        assert_eq!(document.style(b, "border-color").as_deref(), Some("#e2e8f0"));
        let invalid: Vec<_> = report.invalid_fields().map(|f| f.id.as_str()).collect();
        assert_eq!(invalid, vec!["a"]);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        let field = document.add_field(form, "input", "name", "   ", true);

        let report = validator(&document).validate("f").unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.fields[0].value, "");
        assert_eq!(document.style(field, "border-color").as_deref(), Some("#e53e3e"));
    }

    #[test]
    fn test_missing_form_is_valid() {
        let document = MemoryDocument::new();

        let report = validator(&document).validate("nope").unwrap();

        assert!(report.is_valid());
        assert!(!report.found);
        assert!(report.fields.is_empty());
    }

    #[test]
    fn test_optional_fields_are_ignored() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        let optional = document.add_field(form, "input", "nickname", "", false);
        let notes = document.add_field(form, "textarea", "notes", "", true);

        let report = validator(&document).validate("f").unwrap();

        assert!(report.is_valid());
        assert!(report.fields.is_empty());
        assert_eq!(document.style(optional, "border-color"), None);
        assert_eq!(document.style(notes, "border-color"), None);
    }

    #[test]
    fn test_select_fields_are_checked() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        let province = document.add_field(form, "select", "province", "", true);

        let report = validator(&document).validate("f").unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.fields[0].tag, "select");
        assert_eq!(document.style(province, "border-color").as_deref(), Some("#e53e3e"));
    }

    #[test]
    fn test_corrected_field_is_reset() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        let field = document.add_field(form, "input", "surname", "", true);
        let validator = validator(&document);

        assert!(!validator.is_valid("f").unwrap());
        document.set_value(field, "Smith");
        assert!(validator.is_valid("f").unwrap());
        assert_eq!(document.style(field, "border-color").as_deref(), Some("#e2e8f0"));
    }

    #[test]
    fn test_nested_fields_in_document_order() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        let fieldset = document.append_element(form, "fieldset");
        document.add_field(fieldset, "input", "first", "a", true);
        document.add_field(form, "select", "second", "", true);

        let report = validator(&document).validate("f").unwrap();

        let ids: Vec<_> = report.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_report_serializes_for_pages() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        document.add_field(form, "input", "a", "", true);

        let report = validator(&document).validate("f").unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["formId"], "f");
        assert_eq!(json["fields"][0]["state"], "invalid");
        assert_eq!(json["fields"][0]["borderColor"], "#e53e3e");
    }

    #[test]
    fn test_rejected_style_still_marks_other_fields() {
        let document = MemoryDocument::new();
        let form = document.add_form("f");
        let first = document.add_field(form, "input", "first", "", true);
        let icon = document.add_field(form, "input", "icon", "x", true);
        let last = document.add_field(form, "select", "last", "Gauteng", true);
        document.reject_style(icon);

        let result = validator(&document).validate("f");

        assert!(matches!(result, Err(crate::error::UiError::Dom(_))));
        assert_eq!(document.style(first, "border-color").as_deref(), Some("#e53e3e"));
        assert_eq!(document.style(icon, "border-color"), None);
        assert_eq!(document.style(last, "border-color").as_deref(), Some("#e2e8f0"));
    }
}
