use crate::error::ShellError;
use std::path::{Path, PathBuf};

/// Expands a leading `~` into the user's home directory.
#[derive(Clone, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        if self.is_home_path(path) {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ShellError> {
        let without_tilde = &path[1..];
        if without_tilde.is_empty() {
            return self.get_home_dir();
        }

        match without_tilde.strip_prefix('/') {
            Some(stripped) => {
                let mut home_path = self.get_home_dir()?;
                for part in stripped.split('/').filter(|part| !part.is_empty()) {
                    home_path.push(part);
                }
                Ok(home_path)
            }
            // "~user/..." is left alone
            None => Ok(Path::new(path).to_path_buf()),
        }
    }

    pub fn is_home_path(&self, path: &str) -> bool {
        path.starts_with('~')
    }

    pub fn get_home_dir(&self) -> Result<PathBuf, ShellError> {
        dirs::home_dir().ok_or(ShellError::HomeDirNotFound)
    }
}
