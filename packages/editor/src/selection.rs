//! Selection tracking: at most one active block at a time.

/// Tracks the currently active block id, if any.
///
/// The session keeps a set id pointing at a present block: it clears
/// the selection synchronously on every delete and on every switch
/// into preview, before any rendering can observe a stale id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected_id: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_id.is_none()
    }
}
