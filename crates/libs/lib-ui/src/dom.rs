//! # Document Capabilities
//!
//! The helpers never talk to a browser directly. They go through
//! [`Document`], the minimal set of DOM operations they need, so the same
//! logic runs against `web_sys` in the page and against
//! [`MemoryDocument`](crate::testing::MemoryDocument) in tests.
//!
//! Element handles are cheap to clone (a JS reference in the browser, an
//! index in memory) and every operation takes the handle by reference.

use crate::error::Result;

/// Minimal DOM surface used by the notifier and the form validator.
///
/// Implementations must be cheap to clone: the notifier moves a clone of the
/// document into each removal timer.
pub trait Document: Clone + 'static {
    /// Handle to an element of this document.
    type Element: Clone + 'static;

    /// The `<body>` element, if the page has one.
    fn body(&self) -> Option<Self::Element>;

    /// Create a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Element>;

    /// Look up a connected element by its `id` attribute.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Descendants of `root` matching `selectors`, in document order.
    fn query_selector_all(&self, root: &Self::Element, selectors: &str) -> Result<Vec<Self::Element>>;

    fn set_class_name(&self, element: &Self::Element, class_name: &str);

    /// Set the element's text. The text is never parsed as markup.
    fn set_text_content(&self, element: &Self::Element, text: &str);

    /// Insert `child` before the current first child of `parent`.
    fn prepend_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// Detach the element from its parent. Must be a no-op when it is already detached.
    fn remove(&self, element: &Self::Element);

    /// Whether the element is still attached to the document.
    fn is_connected(&self, element: &Self::Element) -> bool;

    /// Current value of a form control; empty for anything else.
    fn value(&self, element: &Self::Element) -> String;

    fn id(&self, element: &Self::Element) -> String;

    /// Lowercase tag name.
    fn tag_name(&self, element: &Self::Element) -> String;

    /// Set an inline style property, e.g. `border-color`.
    fn set_style_property(&self, element: &Self::Element, property: &str, value: &str) -> Result<()>;
}
