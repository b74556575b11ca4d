use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node as WsNode};

use crate::error::Result;

/// Shared handle to an [`Element`] rendered within a fragment. Empty until the fragment is
/// mounted, and emptied again once it is detached.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Rc<RefCell<Option<Element>>>);

impl NodeRef {
    /// The referenced element, if currently mounted.
    pub fn get(&self) -> Option<Element> {
        self.0.borrow().clone()
    }

    pub(super) fn set(&self, element: Option<Element>) {
        *self.0.borrow_mut() = element;
    }
}

/// Information required to build a [`web_sys::Node`]. Offers a friendly interface for creating new
/// [`web_sys::Node`]s, and allows for programatic access to certain attributes before creation
/// (namely whether the node is a text node or an element).
enum NodeType {
    /// A [`web_sys::Text`] node. Containing [`String`] refers to the content of the generated text
    /// node, which will be passed to [`Document::create_text_node()`].
    Text(String),

    /// A [`web_sys::Element`] node. Containing [`String`] refers to the element type (eg `p`,
    /// `div`), which will be passed to [`Document::create_element()`].
    Element(String),
}

pub struct Node {
    node_type: NodeType,
    attributes: Vec<(String, String)>,
    node_ref: Option<NodeRef>,
}

impl Node {
    /// Create a new [`web_sys::Text`] node with the provided content.
    pub fn text<S>(content: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            node_type: NodeType::Text(content.as_ref().to_string()),
            attributes: Vec::new(),
            node_ref: None,
        }
    }

    /// Create a new [`web_sys::Element`] node of the provided type.
    pub fn element<S>(kind: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            node_type: NodeType::Element(kind.as_ref().to_string()),
            attributes: Vec::new(),
            node_ref: None,
        }
    }

    /// Set an attribute on the element. Ignored for text nodes.
    pub fn with_attribute<K, V>(mut self, name: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.attributes
            .push((name.as_ref().to_string(), value.as_ref().to_string()));
        self
    }

    /// Fill `node_ref` with the element whilst it is mounted. Ignored for text nodes.
    pub fn with_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    pub(super) fn node_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// Build a [`web_sys::Node`] based off of the current node representation.
    pub fn create_node(&self, document: &Document) -> Result<WsNode> {
        Ok(match &self.node_type {
            NodeType::Element(element_kind) => {
                let element = document.create_element(element_kind)?;

                for (name, value) in &self.attributes {
                    element.set_attribute(name, value)?;
                }

                element.into()
            }
            NodeType::Text(text_content) => document.create_text_node(text_content).into(),
        })
    }
}

/// Retrieve the [`Element`] behind a node, if it is one.
pub(super) fn as_element(node: &WsNode) -> Option<Element> {
    node.dyn_ref::<Element>().cloned()
}
