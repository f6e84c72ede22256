use std::env;
use std::path::{Path, PathBuf};

use crate::core::commands::{CommandError, CommandResult};

/// Mutable state owned by the read loop and lent to commands.
#[derive(Debug, Clone)]
pub struct ShellState {
    current_dir: PathBuf,
    last_exit_code: Option<i32>,
    last_message: Option<String>,
}

impl ShellState {
    /// Starts in `dir`, which must be an existing directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CommandError> {
        let mut state = Self {
            current_dir: PathBuf::new(),
            last_exit_code: None,
            last_message: None,
        };
        state.set_current_dir(dir.into())?;
        Ok(state)
    }

    /// Starts in the directory the process was launched from.
    pub fn from_env() -> Result<Self, CommandError> {
        Self::new(env::current_dir()?)
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) -> Result<(), CommandError> {
        if !dir.is_dir() {
            return Err(CommandError::PathNotFound(dir));
        }
        self.current_dir = dir;
        Ok(())
    }

    pub fn last_exit_code(&self) -> Option<i32> {
        self.last_exit_code
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn record(&mut self, result: CommandResult) {
        self.last_exit_code = Some(result.exit_code);
        self.last_message = result.message;
    }
}
