//! Arena-backed document tree.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::Document;
use crate::error::{Result, UiError};

/// Handle to a node of a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: String,
    class_name: String,
    text: String,
    value: String,
    required: bool,
    style: BTreeMap<String, String>,
    rejects_style: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    body: Option<NodeId>,
}

impl Tree {
    fn push(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        });
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|child| *child != id);
        }
    }

    fn is_connected(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Descendants of `root` (excluding it) in pre-order.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(root).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }
}

/// One compound selector out of the small subset the memory DOM understands:
/// `tag`, `tag[required]`, `[required]` or `*`.
#[derive(Debug, PartialEq, Eq)]
struct SimpleSelector {
    tag: Option<String>,
    required: bool,
}

impl SimpleSelector {
    fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (tag, required) = match raw.strip_suffix("[required]") {
            Some(tag) => (tag, true),
            None => (raw, false),
        };

        if tag.is_empty() && !required {
            return Err(UiError::Dom(format!("SyntaxError: '{}' is not a valid selector", raw)));
        }
        if !tag.is_empty() && tag != "*" && !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(UiError::Dom(format!("unsupported selector '{}'", raw)));
        }

        let tag = match tag {
            "" | "*" => None,
            tag => Some(tag.to_ascii_lowercase()),
        };
        Ok(Self { tag, required })
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_deref().map_or(true, |tag| node.tag == tag) && (!self.required || node.required)
    }
}

/// In-memory [`Document`] with a `<html><body>` skeleton.
///
/// Clones share the same tree, like handles to a browser document.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Document with an empty body.
    pub fn new() -> Self {
        let document = Self::without_body();
        {
            let mut tree = document.tree.borrow_mut();
            let root = tree.root;
            let body = tree.push("body");
            tree.node_mut(body).parent = Some(root);
            tree.node_mut(root).children.push(body);
            tree.body = Some(body);
        }
        document
    }

    /// Document whose `<html>` element has no body.
    pub fn without_body() -> Self {
        let mut tree = Tree {
            nodes: Vec::new(),
            root: NodeId(0),
            body: None,
        };
        tree.root = tree.push("html");
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// Create an element and append it as the last child of `parent`.
    pub fn append_element(&self, parent: NodeId, tag: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = tree.push(tag);
        tree.node_mut(id).parent = Some(parent);
        tree.node_mut(parent).children.push(id);
        id
    }

    /// Append a `<form id=...>` to the body.
    ///
    /// # Panics
    ///
    /// Panics if the document was created with [`MemoryDocument::without_body`].
    pub fn add_form(&self, id: &str) -> NodeId {
        let body = self.tree.borrow().body.expect("document has no body");
        let form = self.append_element(body, "form");
        self.set_id(form, id);
        form
    }

    /// Append a form control with an id, a value and the `required` flag.
    pub fn add_field(&self, parent: NodeId, tag: &str, id: &str, value: &str, required: bool) -> NodeId {
        let field = self.append_element(parent, tag);
        self.set_id(field, id);
        self.set_value(field, value);
        self.set_required(field, required);
        field
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        self.tree.borrow_mut().node_mut(node).id = id.to_string();
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.tree.borrow_mut().node_mut(node).value = value.to_string();
    }

    pub fn set_required(&self, node: NodeId, required: bool) {
        self.tree.borrow_mut().node_mut(node).required = required;
    }

    /// Make inline style updates on `node` fail, like an element without `style`.
    pub fn reject_style(&self, node: NodeId) {
        self.tree.borrow_mut().node_mut(node).rejects_style = true;
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.borrow().node(node).children.clone()
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.tree.borrow().node(node).tag.clone()
    }

    pub fn class_name(&self, node: NodeId) -> String {
        self.tree.borrow().node(node).class_name.clone()
    }

    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.borrow().node(node).text.clone()
    }

    /// Inline style property, if set.
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree.borrow().node(node).style.get(property).cloned()
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.tree.borrow().is_connected(node)
    }

    /// All connected elements carrying `class` among their classes.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        tree.descendants(tree.root)
            .into_iter()
            .filter(|id| tree.node(*id).class_name.split_whitespace().any(|c| c == class))
            .collect()
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn body(&self) -> Option<NodeId> {
        self.tree.borrow().body
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        if tag.is_empty() {
            return Err(UiError::Dom("InvalidCharacterError: empty tag name".to_string()));
        }
        Ok(self.tree.borrow_mut().push(tag))
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        let tree = self.tree.borrow();
        tree.descendants(tree.root)
            .into_iter()
            .find(|node| tree.node(*node).id == id)
    }

    fn query_selector_all(&self, root: &NodeId, selectors: &str) -> Result<Vec<NodeId>> {
        let selectors = selectors
            .split(',')
            .map(SimpleSelector::parse)
            .collect::<Result<Vec<_>>>()?;

        let tree = self.tree.borrow();
        Ok(tree
            .descendants(*root)
            .into_iter()
            .filter(|id| selectors.iter().any(|s| s.matches(tree.node(*id))))
            .collect())
    }

    fn set_class_name(&self, element: &NodeId, class_name: &str) {
        self.tree.borrow_mut().node_mut(*element).class_name = class_name.to_string();
    }

    fn set_text_content(&self, element: &NodeId, text: &str) {
        let mut tree = self.tree.borrow_mut();
        let children = std::mem::take(&mut tree.node_mut(*element).children);
        for child in children {
            tree.node_mut(child).parent = None;
        }
        tree.node_mut(*element).text = text.to_string();
    }

    fn prepend_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();

        let mut ancestor = Some(*parent);
        while let Some(id) = ancestor {
            if id == *child {
                return Err(UiError::Dom(
                    "HierarchyRequestError: node is an ancestor of the parent".to_string(),
                ));
            }
            ancestor = tree.node(id).parent;
        }

        tree.detach(*child);
        tree.node_mut(*child).parent = Some(*parent);
        tree.node_mut(*parent).children.insert(0, *child);
        Ok(())
    }

    fn remove(&self, element: &NodeId) {
        self.tree.borrow_mut().detach(*element);
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        self.is_attached(*element)
    }

    fn value(&self, element: &NodeId) -> String {
        let tree = self.tree.borrow();
        let node = tree.node(*element);
        match node.tag.as_str() {
            "input" | "select" | "textarea" => node.value.clone(),
            _ => String::new(),
        }
    }

    fn id(&self, element: &NodeId) -> String {
        self.tree.borrow().node(*element).id.clone()
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.tag(*element)
    }

    fn set_style_property(&self, element: &NodeId, property: &str, value: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        let node = tree.node_mut(*element);
        if node.rejects_style {
            return Err(UiError::Dom(format!("<{}> does not support inline style", node.tag)));
        }
        node.style.insert(property.to_string(), value.to_string());
        Ok(())
    }
}
