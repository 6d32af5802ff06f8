//! `web-sys` backed [`Document`].

use lib_ui::dom::Document;
use lib_ui::{Result, UiError};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::utils::js::dom_error;

/// The page's live document.
#[derive(Clone, Debug)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    /// Document of the current window, if running in a page.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl Document for BrowserDocument {
    type Element = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create_element(&self, tag: &str) -> Result<Element> {
        self.document.create_element(tag).map_err(dom_error)
    }

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector_all(&self, root: &Element, selectors: &str) -> Result<Vec<Element>> {
        let list = root.query_selector_all(selectors).map_err(dom_error)?;
        Ok((0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn set_class_name(&self, element: &Element, class_name: &str) {
        element.set_class_name(class_name);
    }

    fn set_text_content(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn prepend_child(&self, parent: &Element, child: &Element) -> Result<()> {
        let first = parent.first_child();
        parent
            .insert_before(child, first.as_ref())
            .map(|_| ())
            .map_err(dom_error)
    }

    fn remove(&self, element: &Element) {
        element.remove();
    }

    fn is_connected(&self, element: &Element) -> bool {
        element.is_connected()
    }

    fn value(&self, element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    fn id(&self, element: &Element) -> String {
        element.id()
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name().to_ascii_lowercase()
    }

    fn set_style_property(&self, element: &Element, property: &str, value: &str) -> Result<()> {
        let html_element = element.dyn_ref::<HtmlElement>().ok_or_else(|| {
            UiError::Dom(format!("<{}> does not support inline style", self.tag_name(element)))
        })?;
        html_element
            .style()
            .set_property(property, value)
            .map_err(dom_error)
    }
}
