//! Human-readable event notices for an external notification surface
//! (toasts, status bars, logs).
//!
//! Delivery is fire-and-forget: the sink cannot report failure, and a
//! sink that drops notices changes nothing about editing state.

use crate::mode::InteractionMode;

/// Events worth surfacing to the user
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    BlockAdded { label: String },
    BlockRemoved,
    ModeChanged { mode: InteractionMode },
    PageSaved,
}

impl Notice {
    pub fn title(&self) -> String {
        match self {
            Notice::BlockAdded { .. } => "Block Added".to_string(),
            Notice::BlockRemoved => "Block Removed".to_string(),
            Notice::ModeChanged { mode } => match mode {
                InteractionMode::Edit => "Edit Mode".to_string(),
                InteractionMode::Preview => "Preview Mode".to_string(),
            },
            Notice::PageSaved => "Page Saved".to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notice::BlockAdded { label } => {
                format!("{} block added to your page.", label)
            }
            Notice::BlockRemoved => "Block has been removed from your page.".to_string(),
            Notice::ModeChanged { mode } => match mode {
                InteractionMode::Edit => "You can now edit your blocks".to_string(),
                InteractionMode::Preview => "Viewing how your page will look".to_string(),
            },
            Notice::PageSaved => "Your page has been saved successfully.".to_string(),
        }
    }
}

/// Best-effort notification surface
pub trait NoticeSink {
    fn notify(&self, notice: Notice);
}

/// Drops every notice
#[derive(Debug, Default)]
pub struct NullNotices;

impl NoticeSink for NullNotices {
    fn notify(&self, _notice: Notice) {}
}

/// Forwards notices to `tracing` at info level
#[derive(Debug, Default)]
pub struct TracingNotices;

impl NoticeSink for TracingNotices {
    fn notify(&self, notice: Notice) {
        tracing::info!(target: "blockpress::notices", "{}: {}", notice.title(), notice.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_texts() {
        let added = Notice::BlockAdded {
            label: "Heading".to_string(),
        };
        assert_eq!(added.title(), "Block Added");
        assert_eq!(added.description(), "Heading block added to your page.");

        let preview = Notice::ModeChanged {
            mode: InteractionMode::Preview,
        };
        assert_eq!(preview.title(), "Preview Mode");
    }
}
