use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "blockpress.config.json";

/// Blockpress configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing .page.json files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory for built HTML
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// HTML build options
    #[serde(default)]
    pub build_options: BuildOptions,
}

fn default_src_dir() -> String {
    "pages".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Pretty print output HTML
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Embed the base block stylesheet
    #[serde(default = "default_true")]
    pub base_styles: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            base_styles: true,
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the pages directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            build_options: BuildOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "srcDir": "content",
            "outDir": "public",
            "buildOptions": { "pretty": false }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.src_dir, "content");
        assert_eq!(config.out_dir, "public");
        assert!(!config.build_options.pretty);
        assert!(config.build_options.base_styles);
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.src_dir, "pages");
        assert_eq!(config.out_dir, "dist");
        assert!(config.build_options.pretty);
    }
}
