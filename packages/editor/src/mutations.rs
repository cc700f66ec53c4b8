//! # Document Mutations
//!
//! High-level semantic operations on the block sequence.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one user-visible operation
//! 2. **Validated**: every mutation checks its preconditions before touching state
//! 3. **Atomic**: a rejected mutation leaves the document byte-for-byte unchanged
//!
//! ## Mutation Semantics
//!
//! ### MoveBlock
//! - Splice-out/splice-in: the block is removed from `from_index` and
//!   reinserted at `to_index` in the post-removal index space (not a swap)
//! - `from_index == to_index` is a no-op
//! - Any out-of-range index rejects the whole operation
//!
//! ### UpdateBlock
//! - `content` is replaced wholesale
//! - `style` is merged key-by-key; properties absent from the patch are retained
//!
//! ### RemoveBlock
//! - Relative order of the remaining blocks is preserved

use crate::block::{Block, StyleMap};
use crate::document::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a fully-formed block to the end of the sequence
    InsertBlock { block: Block },

    /// Partially update a block (content wholesale, style key-by-key)
    UpdateBlock { block_id: String, patch: BlockPatch },

    /// Set a single style property, retaining all others
    SetStyle {
        block_id: String,
        property: String,
        value: String,
    },

    /// Remove a block from the sequence
    RemoveBlock { block_id: String },

    /// Reorder: splice the block at `from_index` out and back in at
    /// `to_index`
    MoveBlock { from_index: usize, to_index: usize },
}

/// Partial block update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BlockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
}

impl BlockPatch {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            style: None,
        }
    }

    pub fn with_style(style: StyleMap) -> Self {
        Self {
            content: None,
            style: Some(style),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(String),

    #[error("Index out of range: {from_index} -> {to_index} in {len} blocks")]
    IndexOutOfRange {
        from_index: usize,
        to_index: usize,
        len: usize,
    },
}

impl Mutation {
    /// Apply mutation to the document with validation
    pub fn apply(&self, doc: &mut Document) -> Result<(), MutationError> {
        // Validate first so a rejection cannot leave partial state
        self.validate(doc)?;

        match self {
            Mutation::InsertBlock { block } => {
                doc.blocks.push(block.clone());
                Ok(())
            }

            Mutation::UpdateBlock { block_id, patch } => {
                Self::apply_update(doc, block_id, patch)
            }

            Mutation::SetStyle {
                block_id,
                property,
                value,
            } => {
                let block = Self::find_block_mut(doc, block_id)?;
                block.style.set(property.clone(), value.clone());
                Ok(())
            }

            Mutation::RemoveBlock { block_id } => {
                let pos = doc
                    .blocks
                    .iter()
                    .position(|b| &b.id == block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                doc.blocks.remove(pos);
                Ok(())
            }

            Mutation::MoveBlock {
                from_index,
                to_index,
            } => {
                if from_index == to_index {
                    return Ok(());
                }
                let block = doc.blocks.remove(*from_index);
                doc.blocks.insert(*to_index, block);
                Ok(())
            }
        }
    }

    fn apply_update(
        doc: &mut Document,
        block_id: &str,
        patch: &BlockPatch,
    ) -> Result<(), MutationError> {
        let block = Self::find_block_mut(doc, block_id)?;

        if let Some(content) = &patch.content {
            block.content = content.clone();
        }
        if let Some(style) = &patch.style {
            block.style.merge(style);
        }

        Ok(())
    }

    fn find_block_mut<'a>(
        doc: &'a mut Document,
        block_id: &str,
    ) -> Result<&'a mut Block, MutationError> {
        doc.blocks
            .iter_mut()
            .find(|b| b.id == block_id)
            .ok_or_else(|| MutationError::BlockNotFound(block_id.to_string()))
    }

    /// Validate without applying
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::InsertBlock { block } => {
                if doc.contains(&block.id) {
                    return Err(MutationError::DuplicateBlockId(block.id.clone()));
                }
                Ok(())
            }

            Mutation::UpdateBlock { block_id, .. }
            | Mutation::SetStyle { block_id, .. }
            | Mutation::RemoveBlock { block_id } => {
                if !doc.contains(block_id) {
                    return Err(MutationError::BlockNotFound(block_id.clone()));
                }
                Ok(())
            }

            Mutation::MoveBlock {
                from_index,
                to_index,
            } => {
                let len = doc.len();
                if *from_index >= len || *to_index >= len {
                    return Err(MutationError::IndexOutOfRange {
                        from_index: *from_index,
                        to_index: *to_index,
                        len,
                    });
                }
                Ok(())
            }
        }
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New document version number
    pub version: u64,
}
