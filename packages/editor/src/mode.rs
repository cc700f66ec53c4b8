//! Edit/preview interaction mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-global interaction mode.
///
/// `Edit` shows the palette and property panel and accepts selection;
/// `Preview` renders blocks in their final form with interactive
/// affordances visible but disabled. A single toggle flips between the
/// two; there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    #[default]
    Edit,
    Preview,
}

impl InteractionMode {
    pub fn toggle(self) -> Self {
        match self {
            InteractionMode::Edit => InteractionMode::Preview,
            InteractionMode::Preview => InteractionMode::Edit,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, InteractionMode::Edit)
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, InteractionMode::Preview)
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionMode::Edit => f.write_str("edit"),
            InteractionMode::Preview => f.write_str("preview"),
        }
    }
}
