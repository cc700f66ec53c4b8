//! # Document
//!
//! The ordered block sequence for one page, and the only place it
//! mutates.
//!
//! Order is meaningful: rendering order = sequence order, and there is
//! no separate rank signal. Non-reordering mutations keep the relative
//! order of untouched blocks stable (insert appends; update and remove
//! never shuffle neighbors).
//!
//! ## Lifecycle
//!
//! ```text
//! New/seeded → Mutate* → Snapshot (save hand-off)
//! ```
//!
//! A document is replaced, never edited in place, when a different
//! template is loaded — that is a session reset, not a document
//! operation.

use crate::block::Block;
use crate::mutations::{Mutation, MutationError, MutationResult};

/// Editable page document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Ordered block sequence
    pub(crate) blocks: Vec<Block>,

    /// Increments on each successfully applied mutation
    version: u64,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document pre-populated from a template collaborator.
    ///
    /// Seeded blocks are trusted except for the id-uniqueness
    /// invariant, which is enforced here.
    pub fn with_blocks(blocks: Vec<Block>) -> Result<Self, MutationError> {
        let mut doc = Self::new();
        for block in blocks {
            Mutation::InsertBlock { block }.apply(&mut doc)?;
        }
        doc.version = 0;
        Ok(doc)
    }

    /// Apply a mutation. The version bumps only when the mutation
    /// actually applied; a rejected mutation leaves the document
    /// untouched, version included.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, MutationError> {
        mutation.apply(self)?;
        self.version += 1;

        Ok(MutationResult {
            version: self.version,
        })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Deep, owned copy of the current ordered sequence. This is what
    /// crosses the save hand-off: later edits cannot reach data a
    /// collaborator already received.
    pub fn snapshot(&self) -> Vec<Block> {
        self.blocks.clone()
    }
}
