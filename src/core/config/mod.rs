//! Shell settings, read from `~/.expl/config.yaml`.
//!
//! Every section and every key has a default, so a partial file is fine:
//! whatever is missing falls back to the value in the matching `Default` impl.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: PromptConfig,
    pub misc: MiscConfig,
    pub colors: ColorsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptConfig {
    pub show_path: bool,
    pub show_prev_cmd_exit_code: bool,
    pub show_user: bool,
    pub separator: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            show_path: true,
            show_prev_cmd_exit_code: true,
            show_user: false,
            separator: ">".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiscConfig {
    pub startup_commands: Vec<String>,
    pub language: String,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            startup_commands: vec!["about --primitive".to_string()],
            language: "en".to_string(),
        }
    }
}

/// Color names as understood by [`crate::highlight::color_by_name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorsConfig {
    #[serde(rename = "aboutBG")]
    pub about_bg: String,
    #[serde(rename = "aboutFG")]
    pub about_fg: String,
    pub ls_dir: String,
    pub ls_file: String,
    pub user: String,
    pub path: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            about_bg: "LIGHTGREEN_EX".to_string(),
            about_fg: "BLACK".to_string(),
            ls_dir: "LIGHTCYAN_EX".to_string(),
            ls_file: "LIGHTRED_EX".to_string(),
            user: "LIGHTYELLOW_EX".to_string(),
            path: "BLUE".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    IoError(PathBuf, std::io::Error),
    Parse(PathBuf, serde_yaml::Error),
    Serialize(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::IoError(path, e) => write!(f, "{}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "could not parse {}: {}", path.display(), e),
            ConfigError::Serialize(e) => write!(f, "could not serialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Serialize(e)
    }
}
