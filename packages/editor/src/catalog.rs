//! Block type catalog: the fixed set of block kinds and their
//! palette entries (label + seed content for new blocks).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Button,
    Form,
}

impl BlockKind {
    /// Catalog order, which is also the palette display order
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Form,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Form => "form",
        }
    }

    /// Multi-line kinds commit inline edits with Ctrl+Enter instead of
    /// Enter.
    pub fn is_multiline(&self) -> bool {
        matches!(self, BlockKind::Text)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(BlockKind::Heading),
            "text" => Ok(BlockKind::Text),
            "image" => Ok(BlockKind::Image),
            "button" => Ok(BlockKind::Button),
            "form" => Ok(BlockKind::Form),
            other => Err(format!("unknown block kind: {}", other)),
        }
    }
}

/// Catalog entry for one block type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTypeDefinition {
    pub kind: BlockKind,

    /// Display name shown in the palette
    pub label: String,

    /// Seed content for new blocks of this kind
    pub default_content: String,
}

impl BlockTypeDefinition {
    pub fn new(
        kind: BlockKind,
        label: impl Into<String>,
        default_content: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            default_content: default_content.into(),
        }
    }
}

/// Ordered, immutable list of block type definitions, loaded once at
/// session start. The definition order is the palette order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    definitions: Vec<BlockTypeDefinition>,
}

impl Catalog {
    pub fn new(definitions: Vec<BlockTypeDefinition>) -> Self {
        Self { definitions }
    }

    pub fn get(&self, kind: BlockKind) -> Option<&BlockTypeDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.get(kind).is_some()
    }

    /// All entries in palette order
    pub fn definitions(&self) -> &[BlockTypeDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            BlockTypeDefinition::new(BlockKind::Heading, "Heading", "Your Heading Here"),
            BlockTypeDefinition::new(BlockKind::Text, "Text", "Add your text content here..."),
            BlockTypeDefinition::new(BlockKind::Image, "Image", "Image placeholder"),
            BlockTypeDefinition::new(BlockKind::Button, "Button", "Click me"),
            BlockTypeDefinition::new(BlockKind::Form, "Form", "Contact Form"),
        ])
    }
}
