use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "schemabuilder.config.json";

/// Schema Builder configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Indent width of the JSON preview
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Show field ids in the outline
    #[serde(default = "default_show_ids")]
    pub show_ids: bool,

    /// Prompt printed by the interactive shell
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_indent() -> usize {
    2
}

fn default_show_ids() -> bool {
    true
}

fn default_prompt() -> String {
    "schema> ".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            show_ids: default_show_ids(),
            prompt: default_prompt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "indent": 4,
            "showIds": false,
            "prompt": "> "
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.indent, 4);
        assert!(!config.show_ids);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "indent": 8 }"#).unwrap();
        assert_eq!(config.indent, 8);
        assert!(config.show_ids);
        assert_eq!(config.prompt, "schema> ");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 2);
        assert!(config.show_ids);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = std::env::temp_dir().join("schemabuilder-config-missing");
        let config = Config::load(&dir.display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }
}
