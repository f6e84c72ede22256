use super::ConfigError;
use std::path::{Path, PathBuf};

const BASE_DIR: &str = ".expl";
const CONFIG_FILE: &str = "config.yaml";
const I18N_DIR: &str = "i18n";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub i18n_dir: PathBuf,
}

impl ConfigPaths {
    /// `~/.expl` and the files inside it.
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_base(home.join(BASE_DIR)))
    }

    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        ConfigPaths {
            config_file: base_dir.join(CONFIG_FILE),
            i18n_dir: base_dir.join(I18N_DIR),
        }
    }

    /// Points the settings file somewhere else; translations stay under the base dir.
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = path.as_ref().to_path_buf();
        self
    }

    pub fn translation_file(&self, language: &str) -> PathBuf {
        self.i18n_dir.join(format!("{}.yaml", language))
    }
}
