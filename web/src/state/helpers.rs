//! Helpers bound to the live document, created on first use.
//!
//! Construction is deferred so page scripts can call `configure` after the
//! module loads and before the first alert or validation.

use std::cell::RefCell;

use lib_ui::dom::Document;
use lib_ui::schedule::Scheduler;
use lib_ui::{ui_config, FormReport, FormValidator, Notice, Notifier, Result, Severity, UiConfig, UiError};

use crate::services::{BrowserDocument, BrowserScheduler};

/// Helpers wired to the window's document and timer queue.
pub type BrowserHelpers = PageHelpers<BrowserDocument, BrowserScheduler>;

/// Notifier, validator and the notices still on screen.
pub struct PageHelpers<D: Document, S: Scheduler> {
    notifier: Notifier<D, S>,
    validator: FormValidator<D>,
    notices: Vec<Notice<D, S::Timer>>,
}

impl<D: Document, S: Scheduler> PageHelpers<D, S> {
    pub fn new(document: D, scheduler: S, config: &UiConfig) -> Self {
        Self {
            notifier: Notifier::new(document.clone(), scheduler, config),
            validator: FormValidator::new(document, config),
            notices: Vec::new(),
        }
    }

    /// Show a notice and keep track of it until it leaves the page.
    ///
    /// Notices no longer on the page are dropped first, so the list never
    /// outgrows what is on screen.
    pub fn show(&mut self, message: &str, severity: Severity) -> Result<()> {
        self.notices.retain(Notice::is_visible);
        let notice = self.notifier.notify(message, severity)?;
        self.notices.push(notice);
        Ok(())
    }

    /// Number of notices currently tracked.
    pub fn tracked(&self) -> usize {
        self.notices.len()
    }

    /// Remove every tracked notice now. Returns how many were still visible.
    pub fn dismiss_all(&mut self) -> usize {
        let notices = std::mem::take(&mut self.notices);
        let visible = notices.iter().filter(|notice| notice.is_visible()).count();
        notices.into_iter().for_each(Notice::dismiss);
        visible
    }

    pub fn validate(&self, form_id: &str) -> Result<FormReport> {
        self.validator.validate(form_id)
    }
}

thread_local! {
    static HELPERS: RefCell<Option<BrowserHelpers>> = const { RefCell::new(None) };
}

/// Run `f` with the page helpers, creating them on first call.
///
/// # Errors
///
/// [`UiError::Dom`] when called outside a window with a document.
pub fn with_helpers<R>(f: impl FnOnce(&mut BrowserHelpers) -> R) -> Result<R> {
    HELPERS.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            let document = BrowserDocument::current()
                .ok_or_else(|| UiError::Dom("no window document available".to_string()))?;
            *slot = Some(PageHelpers::new(document, BrowserScheduler, ui_config()));
            log::debug!("Page helpers bound to document");
        }

        match slot.as_mut() {
            Some(helpers) => Ok(f(helpers)),
            None => Err(UiError::Dom("page helpers unavailable".to_string())),
        }
    })
}
