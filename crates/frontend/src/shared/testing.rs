//! In-memory DOM used by the controller tests.

use super::dom::{AriaNode, NodeScope};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Default)]
struct NodeData {
    attributes: BTreeMap<String, String>,
    inner_html: String,
    parent: Option<FakeNode>,
}

#[derive(Default)]
struct DocumentData {
    nodes: Vec<FakeNode>,
    focused: Option<String>,
}

#[derive(Clone)]
pub struct FakeNode {
    data: Rc<RefCell<NodeData>>,
    document: Rc<RefCell<DocumentData>>,
}

#[derive(Clone, Default)]
pub struct FakeDocument {
    data: Rc<RefCell<DocumentData>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a detached element with the given id and attributes.
    pub fn element(&self, id: &str, attributes: &[(&str, &str)]) -> FakeNode {
        self.insert(None, id, attributes)
    }

    /// Adds an element nested under `parent`.
    pub fn child(&self, parent: &FakeNode, id: &str, attributes: &[(&str, &str)]) -> FakeNode {
        self.insert(Some(parent.clone()), id, attributes)
    }

    fn insert(&self, parent: Option<FakeNode>, id: &str, attributes: &[(&str, &str)]) -> FakeNode {
        let mut data = NodeData {
            parent,
            ..NodeData::default()
        };
        if !id.is_empty() {
            data.attributes.insert("id".to_string(), id.to_string());
        }
        for (name, value) in attributes {
            data.attributes.insert(name.to_string(), value.to_string());
        }
        let node = FakeNode {
            data: Rc::new(RefCell::new(data)),
            document: Rc::clone(&self.data),
        };
        self.data.borrow_mut().nodes.push(node.clone());
        node
    }

    pub fn focused(&self) -> Option<String> {
        self.data.borrow().focused.clone()
    }
}

impl NodeScope for FakeDocument {
    type Node = FakeNode;

    fn find_by_id(&self, id: &str) -> Option<FakeNode> {
        self.data
            .borrow()
            .nodes
            .iter()
            .find(|node| node.id() == id)
            .cloned()
    }
}

impl FakeNode {
    pub fn inner_html(&self) -> String {
        self.data.borrow().inner_html.clone()
    }
}

impl AriaNode for FakeNode {
    fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.data.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.data
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.data.borrow_mut().attributes.remove(name);
    }

    fn set_hidden(&self, hidden: bool) {
        if hidden {
            self.set_attribute("hidden", "");
        } else {
            self.remove_attribute("hidden");
        }
    }

    fn is_hidden(&self) -> bool {
        self.data.borrow().attributes.contains_key("hidden")
    }

    fn focus(&self) {
        let id = self.id();
        self.document.borrow_mut().focused = Some(id);
    }

    fn set_inner_html(&self, html: &str) {
        self.data.borrow_mut().inner_html = html.to_string();
    }

    fn parent(&self) -> Option<Self> {
        self.data.borrow().parent.clone()
    }

    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
