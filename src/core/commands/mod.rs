use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

mod about;
mod cd;
mod clear;
mod echo;
mod err;
pub mod ls;

pub use about::AboutCommand;
pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use echo::EchoCommand;
pub use err::ErrCommand;
pub use ls::LsCommand;

use crate::core::config::Config;
use crate::core::i18n::Translations;
use crate::core::state::ShellState;
use crate::highlight::Painter;
use crate::process::{ProcessError, ProcessExecutor};

/// Exit code for failures raised by the shell itself.
pub const FAILURE_CODE: i32 = -1;

/// Outcome of one command: an exit code and, for errors, what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success() -> Self {
        Self::exited(0)
    }

    pub fn exited(exit_code: i32) -> Self {
        Self {
            exit_code,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            exit_code: FAILURE_CODE,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Debug)]
pub enum CommandError {
    /// Carries the message key describing what is missing.
    MissingArgument(&'static str),
    /// Message key and the offending value.
    InvalidArgument(&'static str, String),
    PathNotFound(PathBuf),
    NotADirectory(PathBuf),
    UnknownCommand(String),
    InterruptedExecution,
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl CommandError {
    /// Localized result for the prompt. Interruptions stay silent.
    pub fn into_result(self, i18n: &Translations) -> CommandResult {
        match self {
            CommandError::MissingArgument(key) => CommandResult::failure(i18n.text(key)),
            CommandError::InvalidArgument(key, _) => CommandResult::failure(i18n.text(key)),
            CommandError::PathNotFound(path) => CommandResult::failure(format!(
                "{}{}",
                i18n.text("cdPathNotFound"),
                path.display()
            )),
            CommandError::NotADirectory(path) => CommandResult::failure(format!(
                "{}{}",
                i18n.text("lsNotADir"),
                path.display()
            )),
            CommandError::UnknownCommand(name) => {
                CommandResult::failure(format!("{}{}", i18n.text("unknownCmd"), name))
            }
            CommandError::InterruptedExecution => CommandResult::exited(FAILURE_CODE),
            CommandError::IoError(e) => CommandResult::failure(e.to_string()),
            CommandError::ProcessError(e) => CommandResult::failure(e.to_string()),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(what) => write!(f, "missing argument: {}", what),
            CommandError::InvalidArgument(what, value) => {
                write!(f, "invalid argument ({}): {}", what, value)
            }
            CommandError::PathNotFound(path) => write!(f, "path not found: {}", path.display()),
            CommandError::NotADirectory(path) => write!(f, "not a directory: {}", path.display()),
            CommandError::UnknownCommand(cmd) => write!(f, "command not found: {}", cmd),
            CommandError::InterruptedExecution => write!(f, "interrupted"),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::CommandNotFound(cmd) => CommandError::UnknownCommand(cmd),
            ProcessError::Interrupted => CommandError::InterruptedExecution,
            other => CommandError::ProcessError(other),
        }
    }
}

/// Everything a command may look at or touch while it runs.
pub struct ExecContext<'a> {
    pub state: &'a mut ShellState,
    pub config: &'a Config,
    pub i18n: &'a Translations,
    pub painter: Painter,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError>;
}

enum CommandType {
    About(AboutCommand),
    Clear(ClearCommand),
    Echo(EchoCommand),
    Err(ErrCommand),
    Cd(CdCommand),
    Ls(LsCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        match self {
            CommandType::About(cmd) => cmd.execute(args, ctx),
            CommandType::Clear(cmd) => cmd.execute(args, ctx),
            CommandType::Echo(cmd) => cmd.execute(args, ctx),
            CommandType::Err(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Ls(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Runs a command line: a builtin when the name is registered, an external
/// program otherwise.
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new() -> Result<Self, CommandError> {
        let mut commands = BTreeMap::new();
        commands.insert("about", CommandType::About(AboutCommand));
        commands.insert("clear", CommandType::Clear(ClearCommand));
        commands.insert("echo", CommandType::Echo(EchoCommand));
        commands.insert("err", CommandType::Err(ErrCommand));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("ls", CommandType::Ls(LsCommand::new()));

        Ok(Self {
            commands,
            process_executor: ProcessExecutor::new()?,
        })
    }

    /// Never fails: errors come back as a non-zero result.
    pub fn dispatch(&self, tokens: &[String], ctx: &mut ExecContext<'_>) -> CommandResult {
        let Some((name, args)) = tokens.split_first() else {
            return CommandResult::success();
        };

        tracing::debug!(command = %name, ?args, "dispatching");
        let result = self.execute(name, args, ctx);
        if let Err(e) = ctx.out.flush() {
            tracing::warn!(error = %e, "could not flush output");
        }

        match result {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(command = %name, error = %e, "command failed");
                e.into_result(ctx.i18n)
            }
        }
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            return cmd.execute(args, ctx);
        }

        // The child writes straight to the terminal, so ours must go first.
        ctx.out.flush()?;
        let code = self
            .process_executor
            .run(command, args, ctx.state.current_dir())?;
        Ok(CommandResult::exited(code))
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::path::Path;

    /// Owns what an [`ExecContext`] borrows, with output captured in memory.
    pub struct Fixture {
        pub state: ShellState,
        pub config: Config,
        pub i18n: Translations,
        pub out: Vec<u8>,
    }

    impl Fixture {
        pub fn new(dir: &Path) -> Self {
            Self {
                state: ShellState::new(dir).unwrap(),
                config: Config::default(),
                i18n: Translations::builtin(),
                out: Vec::new(),
            }
        }

        pub fn context(&mut self) -> ExecContext<'_> {
            ExecContext {
                state: &mut self.state,
                config: &self.config,
                i18n: &self.i18n,
                painter: Painter::plain(),
                out: &mut self.out,
            }
        }

        pub fn run<C: Command>(
            &mut self,
            cmd: &C,
            args: &[&str],
        ) -> Result<CommandResult, CommandError> {
            let args = strings(args);
            cmd.execute(&args, &mut self.context())
        }

        pub fn output(&self) -> String {
            String::from_utf8_lossy(&self.out).into_owned()
        }
    }

    pub fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }
}
