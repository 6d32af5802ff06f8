//! # Notifier
//!
//! Shows short-lived alert banners at the top of the page.
//!
//! Each call to [`Notifier::notify`] creates one `<div class="alert alert-<severity>">`,
//! inserts it as the first child of `<body>` and arms a one-shot timer that
//! removes exactly that element once the configured lifetime elapses. Calls are
//! independent: banners stack newest-first and each keeps its own timer.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use lib_ui::config::UiConfig;
//! use lib_ui::notifier::Notifier;
//! use lib_ui::severity::Severity;
//! use lib_ui::testing::{ManualClock, MemoryDocument};
//!
//! let document = MemoryDocument::new();
//! let clock = ManualClock::new();
//! let notifier = Notifier::new(document.clone(), clock.clone(), &UiConfig::default());
//!
//! let notice = notifier.notify("User created", Severity::Success).unwrap();
//! assert!(document.is_attached(*notice.element()));
//!
//! clock.advance(Duration::from_millis(5000));
//! assert!(!document.is_attached(*notice.element()));
//! ```

use std::time::Duration;

use crate::config::UiConfig;
use crate::dom::Document;
use crate::error::{Result, UiError};
use crate::schedule::{Scheduler, TimerHandle};
use crate::severity::Severity;

/// Inserts self-removing notices into a document.
#[derive(Clone)]
pub struct Notifier<D, S> {
    document: D,
    scheduler: S,
    lifetime: Duration,
    notice_class: String,
}

impl<D: Document, S: Scheduler> Notifier<D, S> {
    pub fn new(document: D, scheduler: S, config: &UiConfig) -> Self {
        Self {
            document,
            scheduler,
            lifetime: config.notice_lifetime(),
            notice_class: config.notice_class.clone(),
        }
    }

    /// Show `message` as the topmost notice and schedule its removal.
    ///
    /// The returned [`Notice`] may be dropped freely; the removal stays armed.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingBody`] if the document has no body
    /// - [`UiError::Dom`] if the host rejects the insertion
    pub fn notify(&self, message: &str, severity: Severity) -> Result<Notice<D, S::Timer>> {
        let body = self.document.body().ok_or(UiError::MissingBody)?;

        let element = self.document.create_element("div")?;
        let class_name = severity.class_name(&self.notice_class);
        self.document.set_class_name(&element, &class_name);
        self.document.set_text_content(&element, message);
        self.document.prepend_child(&body, &element)?;

        let timer = {
            let document = self.document.clone();
            let target = element.clone();
            self.scheduler
                .schedule(self.lifetime, Box::new(move || document.remove(&target)))
        };

        log::debug!(
            "Notice shown: class='{}', expires in {}ms",
            class_name,
            self.lifetime.as_millis()
        );

        Ok(Notice {
            document: self.document.clone(),
            element,
            timer: Some(timer),
            message: message.to_string(),
            severity,
        })
    }
}

/// A notice currently (or formerly) on the page.
pub struct Notice<D: Document, T> {
    document: D,
    element: D::Element,
    timer: Option<T>,
    message: String,
    severity: Severity,
}

impl<D: Document, T: TimerHandle> Notice<D, T> {
    pub fn element(&self) -> &D::Element {
        &self.element
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    /// Whether the banner is still on the page.
    pub fn is_visible(&self) -> bool {
        self.document.is_connected(&self.element)
    }

    /// Remove the banner now and cancel its pending removal.
    ///
    /// Safe to call after the banner expired or was removed by other means.
    pub fn dismiss(mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.document.remove(&self.element);
        log::debug!("Notice dismissed: '{}'", self.message);
    }
}
