use std::io::ErrorKind;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use super::signal::InterruptFlag;
use super::ProcessError;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs external programs in the foreground.
pub struct ProcessExecutor {
    interrupt: InterruptFlag,
}

impl ProcessExecutor {
    pub fn new() -> Result<Self, ProcessError> {
        Ok(ProcessExecutor {
            interrupt: InterruptFlag::register()?,
        })
    }

    /// Spawns `program` in `cwd` with the shell's stdio and waits for it.
    ///
    /// Returns the child's exit code. A child killed by a signal reports the
    /// negated signal number, except SIGINT, which (like a SIGINT received
    /// while waiting) is [`ProcessError::Interrupted`]. A child still running
    /// after a SIGINT is killed.
    pub fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<i32, ProcessError> {
        let mut command = Command::new(program_path(program, cwd));
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        self.interrupt.reset();
        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.to_string()))
            }
            Err(e) => return Err(ProcessError::Spawn(program.to_string(), e)),
        };

        tracing::debug!(pid = child.id(), program, cwd = %cwd.display(), "spawned");
        let status = self.wait(&mut child)?;
        let interrupted = self.interrupt.take();
        tracing::debug!(%status, interrupted, "child finished");

        exit_code(status, interrupted)
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus, ProcessError> {
        loop {
            if let Some(status) = child.try_wait().map_err(ProcessError::Wait)? {
                return Ok(status);
            }
            if self.interrupt.take() {
                break;
            }
            thread::sleep(POLL_INTERVAL);
        }

        tracing::debug!(pid = child.id(), "interrupted, killing child");
        if let Err(e) = child.kill() {
            tracing::debug!(error = %e, "kill failed");
        }
        child.wait().map_err(ProcessError::Wait)?;
        Err(ProcessError::Interrupted)
    }
}

// "./tool" should mean the shell's directory, not the process's.
fn program_path(program: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(program);
    if program.contains('/') && path.is_relative() {
        cwd.join(path)
    } else {
        path.to_path_buf()
    }
}

fn exit_code(status: ExitStatus, interrupted: bool) -> Result<i32, ProcessError> {
    if interrupted {
        return Err(ProcessError::Interrupted);
    }
    match (status.code(), status.signal()) {
        (Some(code), _) => Ok(code),
        (None, Some(libc::SIGINT)) => Err(ProcessError::Interrupted),
        (None, Some(signal)) => Ok(-signal),
        (None, None) => Ok(-1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::time::Instant;
    use tempfile::TempDir;

    fn run(program: &str, args: &[&str], cwd: &Path) -> Result<i32, ProcessError> {
        let executor = ProcessExecutor::new().unwrap();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        executor.run(program, &args, cwd)
    }

    #[test]
    fn test_exit_codes_pass_through() {
        let dir = TempDir::new().unwrap();
        assert_eq!(run("true", &[], dir.path()).unwrap(), 0);
        assert_eq!(run("sh", &["-c", "exit 42"], dir.path()).unwrap(), 42);
    }

    #[test]
    fn test_command_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            run("no-such-binary-for-expl-tests", &[], dir.path()),
            Err(ProcessError::CommandNotFound(_))
        ));
    }

    #[test]
    fn test_runs_in_given_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("here"), "").unwrap();
        assert_eq!(run("test", &["-f", "here"], dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_relative_program_uses_cwd() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("tool.sh");
        fs::write(&script, "#!/bin/sh\nexit 5\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(run("./tool.sh", &[], dir.path()).unwrap(), 5);
    }

    #[test]
    fn test_permission_denied_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("locked.sh");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(matches!(
            run("./locked.sh", &[], dir.path()),
            Err(ProcessError::Spawn(_, _))
        ));
    }

    #[test]
    fn test_killed_by_signal() {
        let dir = TempDir::new().unwrap();
        assert_eq!(run("sh", &["-c", "kill -TERM $$"], dir.path()).unwrap(), -libc::SIGTERM);
    }

    #[test]
    fn test_sigint_death_is_interrupt() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            run("sh", &["-c", "kill -INT $$"], dir.path()),
            Err(ProcessError::Interrupted)
        ));
    }

    #[test]
    fn test_interrupt_kills_child_ignoring_sigint() {
        let executor = ProcessExecutor::new().unwrap();
        let mut child = Command::new("sh")
            .args(["-c", "trap '' INT; exec sleep 5"])
            .spawn()
            .unwrap();
        executor.interrupt.raise();

        let started = Instant::now();
        assert!(matches!(
            executor.wait(&mut child),
            Err(ProcessError::Interrupted)
        ));
        assert!(started.elapsed() < Duration::from_secs(4));
        assert!(child.try_wait().unwrap().is_some());
        assert!(!executor.interrupt.take());
    }

    #[test]
    fn test_wait_without_interrupt_returns_status() {
        let executor = ProcessExecutor::new().unwrap();
        let mut child = Command::new("sh").args(["-c", "exit 6"]).spawn().unwrap();

        assert_eq!(executor.wait(&mut child).unwrap().code(), Some(6));
    }

    #[test]
    fn test_exit_code_interrupted_wins() {
        assert!(matches!(
            exit_code(ExitStatus::from_raw(0), true),
            Err(ProcessError::Interrupted)
        ));
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8), false).unwrap(), 3);
    }
}
