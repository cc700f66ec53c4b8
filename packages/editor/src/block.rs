//! Block data model: the atomic content unit and its style bag.

use crate::catalog::{BlockKind, BlockTypeDefinition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Style properties the editor surfaces as dedicated panel fields.
/// Anything else in a [`StyleMap`] is carried through untouched.
pub const RECOGNIZED_STYLE_PROPERTIES: [&str; 5] =
    ["fontSize", "color", "backgroundColor", "padding", "margin"];

/// Padding applied to freshly created blocks.
pub const DEFAULT_PADDING: &str = "1rem";

/// Margin applied to freshly created blocks.
pub const DEFAULT_MARGIN: &str = "0.5rem";

/// Open bag of style properties (property name → free-form value).
///
/// Values are never validated; unrecognized property names are
/// preserved so newer tooling can round-trip styles this version
/// doesn't know about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(HashMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Merge `other` key-by-key. Existing properties absent from
    /// `other` are retained.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_recognized(property: &str) -> bool {
        RECOGNIZED_STYLE_PROPERTIES.contains(&property)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Atomic content unit of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique within the owning document, immutable after creation
    pub id: String,

    /// Immutable after creation; a "type change" is delete + add
    pub kind: BlockKind,

    /// Single string payload; interpretation depends on `kind`
    /// (body text, placeholder label, button label, form title)
    pub content: String,

    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
            style: StyleMap::new(),
        }
    }

    /// Construct a block from a catalog entry: default content plus the
    /// default spacing bag.
    pub fn from_definition(id: impl Into<String>, definition: &BlockTypeDefinition) -> Self {
        let mut style = StyleMap::new();
        style.set("padding", DEFAULT_PADDING);
        style.set("margin", DEFAULT_MARGIN);

        Self {
            id: id.into(),
            kind: definition.kind,
            content: definition.default_content.clone(),
            style,
        }
    }
}
