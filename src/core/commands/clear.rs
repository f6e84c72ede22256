use super::{Command, CommandError, CommandResult, ExecContext};

/// Cursor home, clear screen, clear scrollback.
pub const CLEAR_SEQUENCE: &str = "\x1b[H\x1b[2J\x1b[3J";

#[derive(Clone, Default)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        write!(ctx.out, "{}", CLEAR_SEQUENCE)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clear_emits_sequence() {
        let dir = TempDir::new().unwrap();
        let mut fixture = Fixture::new(dir.path());

        assert!(fixture.run(&ClearCommand, &["ignored"]).unwrap().is_success());
        assert_eq!(fixture.output(), CLEAR_SEQUENCE);
    }
}
