use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGINT;
use signal_hook::SigId;

use crate::process::ProcessError;

/// Records SIGINT in a flag instead of letting it terminate the shell.
///
/// The foreground child receives the same signal and deals with it on its
/// own; the shell only needs to know it happened. The handler is removed on drop.
pub struct InterruptFlag {
    flag: Arc<AtomicBool>,
    id: SigId,
}

impl InterruptFlag {
    pub fn register() -> Result<Self, ProcessError> {
        let flag = Arc::new(AtomicBool::new(false));
        let id = signal_hook::flag::register(SIGINT, Arc::clone(&flag))
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;
        Ok(Self { flag, id })
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    #[cfg(test)]
    pub(crate) fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether SIGINT arrived since the last reset; clears the flag.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::SeqCst)
    }
}

impl Drop for InterruptFlag {
    fn drop(&mut self) {
        signal_hook::low_level::unregister(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_clear() {
        let flag = InterruptFlag::register().unwrap();
        assert!(!flag.take());
    }

    #[test]
    fn test_take_clears() {
        let flag = InterruptFlag::register().unwrap();
        flag.raise();

        assert!(flag.take());
        assert!(!flag.take());
    }
}
