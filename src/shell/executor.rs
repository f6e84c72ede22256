use std::io::Write;

use crate::core::commands::{CommandExecutor, CommandResult, ExecContext};
use crate::core::config::Config;
use crate::core::i18n::Translations;
use crate::core::state::ShellState;
use crate::highlight::Painter;

use super::prompt::{self, Identity};

pub const EXIT_KEYWORD: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Whitespace-separated tokens of one input line.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Everything the loop needs apart from the line editor.
pub struct Session {
    pub(crate) state: ShellState,
    pub(crate) config: Config,
    pub(crate) i18n: Translations,
    pub(crate) painter: Painter,
    pub(crate) executor: CommandExecutor,
}

impl Session {
    pub fn new(
        state: ShellState,
        config: Config,
        i18n: Translations,
        painter: Painter,
        executor: CommandExecutor,
    ) -> Self {
        Self {
            state,
            config,
            i18n,
            painter,
            executor,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn prompt(&self, identity: &Identity) -> String {
        let segments = prompt::segments(&self.config.prompt, &self.state, identity);
        prompt::render(
            &segments,
            &self.config.prompt.separator,
            &self.painter,
            &self.config.colors,
        )
    }

    fn dispatch(&mut self, tokens: &[String], out: &mut dyn Write) -> CommandResult {
        let mut ctx = ExecContext {
            state: &mut self.state,
            config: &self.config,
            i18n: &self.i18n,
            painter: self.painter,
            out,
        };
        self.executor.dispatch(tokens, &mut ctx)
    }

    /// Runs the configured startup lines; only their side effects are kept.
    pub fn run_startup(&mut self, out: &mut dyn Write) {
        let startup = self.config.misc.startup_commands.clone();
        for line in startup {
            let tokens = tokenize(&line);
            if tokens.is_empty() {
                continue;
            }

            let result = self.dispatch(&tokens, out);
            if !result.is_success() {
                tracing::warn!(
                    command = %line,
                    exit_code = result.exit_code,
                    message = ?result.message,
                    "startup command failed"
                );
            }
        }
    }
}

pub(crate) trait CommandHandler {
    fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Flow;
}

impl CommandHandler for Session {
    fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Flow {
        let tokens = tokenize(line);
        let Some(first) = tokens.first() else {
            return Flow::Continue;
        };
        if first == EXIT_KEYWORD {
            return Flow::Exit;
        }

        let result = self.dispatch(&tokens, out);
        self.state.record(result);

        if let Some(message) = self.state.last_message() {
            let rendered = self.painter.error(self.i18n.text("error"), message);
            if let Err(e) = writeln!(out, "{}", rendered).and_then(|_| out.flush()) {
                tracing::warn!(error = %e, "could not print error message");
            }
        }
        Flow::Continue
    }
}
