use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

mod executor;
mod prompt;

pub use executor::{tokenize, Flow, Session, EXIT_KEYWORD};
pub use prompt::{Identity, Segment};

use crate::core::commands::CommandExecutor;
use crate::core::config::{ConfigLoader, ConfigPaths};
use crate::core::i18n::{self, Translations};
use crate::core::state::ShellState;
use crate::error::ShellError;
use crate::flags::Flags;
use crate::highlight::Painter;

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) session: Session,
    pub(crate) identity: Identity,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut paths = ConfigPaths::new()?;
        if let Some(config_file) = flags.get_value("config") {
            paths = paths.with_config_file(config_file);
        }

        i18n::ensure_installed(&paths, &i18n::default_sources())?;
        let config = ConfigLoader::new(&paths).load_or_init()?;
        let translations = Translations::load(&paths, &config.misc.language)?;

        let state = ShellState::from_env()?;
        let executor = CommandExecutor::new()?;
        let session = Session::new(state, config, translations, Painter::detect(), executor);

        Ok(Shell {
            editor: DefaultEditor::new()?,
            session,
            identity: Identity::detect(),
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut stdout = io::stdout();
        if !self.flags.is_set("quiet") {
            self.session.run_startup(&mut stdout);
        }

        let editor = &mut self.editor;
        read_loop(
            &mut self.session,
            &self.identity,
            |prompt| editor.readline(prompt),
            &mut stdout,
        )
    }
}

/// Prompts with `read_line` until `exit` or end of input.
fn read_loop<R>(
    session: &mut Session,
    identity: &Identity,
    mut read_line: R,
    out: &mut dyn Write,
) -> Result<(), ShellError>
where
    R: FnMut(&str) -> Result<String, ReadlineError>,
{
    loop {
        let prompt = session.prompt(identity);
        match read_line(&prompt) {
            Ok(line) => {
                if session.handle_line(&line, out) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(out)?;
                continue;
            }
            Err(ReadlineError::Eof) => {
                writeln!(out)?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
