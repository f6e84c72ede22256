use std::fs;
use std::path::Path;

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Reads the settings file, writing the defaults there first if it is missing.
    pub fn load_or_init(&self) -> Result<Config, ConfigError> {
        let path = &self.paths.config_file;
        if !path.exists() {
            let config = Config::default();
            self.write(path, &config)?;
            tracing::info!(path = %path.display(), "wrote default config");
            return Ok(config);
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::IoError(path.clone(), e))?;
        let config =
            Config::from_yaml(&content).map_err(|e| ConfigError::Parse(path.clone(), e))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn write(&self, path: &Path, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(parent.to_path_buf(), e))?;
        }
        fs::write(path, config.to_yaml()?).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_writes_defaults() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path().join(".expl"));

        let config = ConfigLoader::new(&paths).load_or_init().unwrap();

        assert_eq!(config, Config::default());
        assert!(paths.config_file.is_file());
        let written = fs::read_to_string(&paths.config_file).unwrap();
        assert_eq!(Config::from_yaml(&written).unwrap(), Config::default());
    }

    #[test]
    fn test_existing_file_is_read() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path());
        fs::write(&paths.config_file, "prompt:\n  separator: \"$ \"\n").unwrap();

        let config = ConfigLoader::new(&paths).load_or_init().unwrap();

        assert_eq!(config.prompt.separator, "$ ");
        assert!(config.prompt.show_path);
    }

    #[test]
    fn test_existing_file_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path());
        fs::write(&paths.config_file, "misc:\n  language: sk\n").unwrap();

        ConfigLoader::new(&paths).load_or_init().unwrap();

        let content = fs::read_to_string(&paths.config_file).unwrap();
        assert_eq!(content, "misc:\n  language: sk\n");
    }

    #[test]
    fn test_parse_error_names_file() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path());
        fs::write(&paths.config_file, "prompt: [").unwrap();

        let err = ConfigLoader::new(&paths).load_or_init().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
        assert!(err.to_string().contains("config.yaml"));
    }
}
