use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Interrupted,
    SignalError(String),
    Spawn(String, std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Interrupted => write!(f, "Interrupted"),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
            ProcessError::Spawn(cmd, e) => write!(f, "{}: {}", cmd, e),
            ProcessError::Wait(e) => write!(f, "Wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
