//! # Page Flow Tests
//!
//! Notifier and validator driven together the way a page submit handler uses them.

use std::time::Duration;

use lib_ui::testing::{ManualClock, MemoryDocument};
use lib_ui::{FormValidator, Notifier, Severity, UiConfig};

struct Page {
    document: MemoryDocument,
    clock: ManualClock,
    notifier: Notifier<MemoryDocument, ManualClock>,
    validator: FormValidator<MemoryDocument>,
}

fn setup_page() -> Page {
    let config = UiConfig::default();
    let document = MemoryDocument::new();
    let clock = ManualClock::new();
    Page {
        notifier: Notifier::new(document.clone(), clock.clone(), &config),
        validator: FormValidator::new(document.clone(), &config),
        document,
        clock,
    }
}

/// Submit handler as written on the add-user page.
fn submit(page: &Page, form_id: &str) -> bool {
    if !page.validator.is_valid(form_id).unwrap() {
        page.notifier
            .notify("Please fill in all required fields", Severity::Error)
            .unwrap();
        return false;
    }
    page.notifier.notify("User created", Severity::Success).unwrap();
    true
}

#[test]
fn test_add_user_form_round() {
    // Arrange
    let page = setup_page();
    let form = page.document.add_form("add-user-form");
    let first = page.document.add_field(form, "input", "first_name", "Thandi", true);
    let last = page.document.add_field(form, "input", "last_name", "   ", true);
    let province = page.document.add_field(form, "select", "province", "", true);
    page.document.add_field(form, "input", "middle_name", "", false);

    // Act
    let accepted = submit(&page, "add-user-form");

    // Assert
    assert!(!accepted);
    assert_eq!(page.document.style(first, "border-color").as_deref(), Some("#e2e8f0"));
    assert_eq!(page.document.style(last, "border-color").as_deref(), Some("#e53e3e"));
    assert_eq!(page.document.style(province, "border-color").as_deref(), Some("#e53e3e"));

    let alerts = page.document.elements_with_class("alert-error");
    assert_eq!(alerts.len(), 1);
    assert_eq!(
        page.document.text_content(alerts[0]),
        "Please fill in all required fields"
    );

    // User corrects the form and resubmits
    page.document.set_value(last, "Mokoena");
    page.document.set_value(province, "Gauteng");
    assert!(submit(&page, "add-user-form"));
    assert_eq!(page.document.style(last, "border-color").as_deref(), Some("#e2e8f0"));

    let body = page.document.children(page.document_body());
    assert_eq!(page.document.class_name(body[0]), "alert alert-success");
    assert_eq!(page.document.class_name(body[1]), "alert alert-error");

    // Both banners were shown at t = 0
    page.clock.advance(Duration::from_millis(5000));
    assert!(page.document.elements_with_class("alert").is_empty());
    assert_eq!(page.clock.pending(), 0);
}

#[test]
fn test_validation_is_idempotent() {
    let page = setup_page();
    let form = page.document.add_form("f");
    let a = page.document.add_field(form, "input", "a", "", true);
    let b = page.document.add_field(form, "input", "b", "x", true);

    let first = page.validator.validate("f").unwrap();
    let styles_after_first = (page.document.style(a, "border-color"), page.document.style(b, "border-color"));
    let second = page.validator.validate("f").unwrap();
    let styles_after_second = (page.document.style(a, "border-color"), page.document.style(b, "border-color"));

    assert_eq!(first, second);
    assert_eq!(styles_after_first, styles_after_second);
}

#[test]
fn test_form_without_required_fields_is_valid() {
    let page = setup_page();
    let form = page.document.add_form("search");
    page.document.add_field(form, "input", "q", "", false);
    page.document.add_field(form, "select", "sort", "", false);

    assert!(page.validator.is_valid("search").unwrap());
}

#[test]
fn test_misnamed_form_fails_open() {
    let page = setup_page();
    let form = page.document.add_form("edit-user-form");
    page.document.add_field(form, "input", "first_name", "", true);

    assert!(submit(&page, "edit-user"));
}

#[test]
fn test_notices_stack_and_expire_independently() {
    let page = setup_page();

    let mut shown = Vec::new();
    for (i, severity) in ["success", "error", "warning", "info", "danger"].into_iter().enumerate() {
        if i > 0 {
            page.clock.advance(Duration::from_millis(1000));
        }
        let notice = page
            .notifier
            .notify(&format!("message {i}"), Severity::from(severity))
            .unwrap();
        shown.push(*notice.element());
    }

    let body = page.document_body();
    let on_page = page.document.children(body);
    let newest_first: Vec<_> = shown.iter().rev().copied().collect();
    assert_eq!(on_page, newest_first);
    assert_eq!(page.document.class_name(shown[4]), "alert alert-danger");

    // t = 5000: the first notice reaches its lifetime
    page.clock.advance(Duration::from_millis(1000));
    assert_eq!(page.document.children(body).len(), 4);
    page.clock.advance(Duration::from_millis(3999));
    assert_eq!(page.document.children(body), vec![shown[4]]);
    page.clock.advance(Duration::from_millis(1));
    assert!(page.document.children(body).is_empty());
}

impl Page {
    fn document_body(&self) -> lib_ui::testing::NodeId {
        use lib_ui::dom::Document;
        self.document.body().unwrap()
    }
}
