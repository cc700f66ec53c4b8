use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: HashMap<String, String>,
        styles: HashMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }
}

/// Virtual page (ordered collection of root nodes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualPage {
    pub nodes: Vec<VNode>,
}
