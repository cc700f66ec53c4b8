//! Page files: the persistence collaborator on the far side of the
//! save hand-off. A page file is the editor's ordered block list plus
//! listing metadata (title, status, timestamps).

use blockpress_editor::Block;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PAGE_FILE_SUFFIX: &str = ".page.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFile {
    pub title: String,

    /// Template the page was seeded from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default)]
    pub status: PageStatus,

    /// RFC 3339 timestamp of the last save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl PageFile {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            template: None,
            status: PageStatus::Draft,
            last_modified: None,
            blocks,
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let page: PageFile = serde_json::from_str(&content)?;
        Ok(page)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Stamp the last-modified time with the current wall clock
    pub fn touch(&mut self) {
        self.last_modified = Some(chrono::Utc::now().to_rfc3339());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_editor::BlockKind;

    #[test]
    fn test_page_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.page.json");

        let mut page = PageFile::new(
            "Home",
            vec![Block::new("b-1", BlockKind::Heading, "Welcome")],
        );
        page.status = PageStatus::Published;
        page.touch();
        page.save(&path).unwrap();

        let loaded = PageFile::load(&path).unwrap();

        assert_eq!(loaded.title, "Home");
        assert_eq!(loaded.status, PageStatus::Published);
        assert!(loaded.last_modified.is_some());
        assert_eq!(loaded.blocks.len(), 1);
        assert_eq!(loaded.blocks[0].kind, BlockKind::Heading);
    }

    #[test]
    fn test_minimal_page_file_parses() {
        let page: PageFile = serde_json::from_str(r#"{ "title": "Bare" }"#).unwrap();

        assert_eq!(page.title, "Bare");
        assert_eq!(page.status, PageStatus::Draft);
        assert!(page.blocks.is_empty());
    }
}
