//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Block kind \"{0}\" is not in the catalog")]
    UnknownBlockKind(String),

    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("No block is selected")]
    NothingSelected,

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),
}
