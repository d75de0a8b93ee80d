//! The slice of the DOM the widget controllers touch.
//!
//! Controllers are generic over [`AriaNode`] and [`NodeScope`] so they only ever
//! see the elements under the root they were mounted on. The browser
//! implementation lives here; tests use `shared::testing`.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub trait AriaNode: Clone {
    fn id(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    fn set_hidden(&self, hidden: bool);
    fn is_hidden(&self) -> bool;
    fn focus(&self);
    fn set_inner_html(&self, html: &str);
    fn parent(&self) -> Option<Self>;
    /// Identity comparison, not structural equality.
    fn same_node(&self, other: &Self) -> bool;
}

/// Id lookup restricted to one widget root.
pub trait NodeScope {
    type Node: AriaNode;

    fn find_by_id(&self, id: &str) -> Option<Self::Node>;
}

impl AriaNode for HtmlElement {
    fn id(&self) -> String {
        Element::id(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = Element::set_attribute(self, name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = Element::remove_attribute(self, name);
    }

    fn set_hidden(&self, hidden: bool) {
        HtmlElement::set_hidden(self, hidden);
    }

    fn is_hidden(&self) -> bool {
        self.hidden()
    }

    fn focus(&self) {
        let _ = HtmlElement::focus(self);
    }

    fn set_inner_html(&self, html: &str) {
        Element::set_inner_html(self, html);
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()?.dyn_into::<HtmlElement>().ok()
    }

    fn same_node(&self, other: &Self) -> bool {
        self == other
    }
}

/// Nearest ancestor of `node` (or `node` itself) whose `name` attribute
/// equals `value`.
pub fn closest_with_attribute<N: AriaNode>(node: &N, name: &str, value: &str) -> Option<N> {
    let mut current = Some(node.clone());
    while let Some(candidate) = current {
        if candidate.attribute(name).as_deref() == Some(value) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

#[derive(Clone)]
pub struct DomScope {
    root: Element,
}

impl DomScope {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// All `HtmlElement`s under the root matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        query_all(&self.root, selector)
    }
}

impl NodeScope for DomScope {
    type Node = HtmlElement;

    fn find_by_id(&self, id: &str) -> Option<HtmlElement> {
        if self.root.id() == id {
            return self.root.clone().dyn_into::<HtmlElement>().ok();
        }
        // Searched inside the root so a duplicate id elsewhere on the page
        // cannot shadow this widget's element.
        let element = self
            .root
            .query_selector(&attribute_selector("id", id))
            .ok()
            .flatten()?;
        element.dyn_into::<HtmlElement>().ok()
    }
}

/// `[name="value"]` with the value quoted for CSS.
pub fn attribute_selector(name: &str, value: &str) -> String {
    let mut quoted = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\a "),
            _ => quoted.push(c),
        }
    }
    format!("[{}=\"{}\"]", name, quoted)
}

pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("Invalid selector `{}`", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
