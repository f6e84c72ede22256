use super::{Command, CommandError, CommandResult, ExecContext};
use crate::path::PathResolver;

/// Changes the shell's working directory; prints it when called bare.
///
/// Only [`crate::core::state::ShellState`] changes, the process working
/// directory stays where it was.
#[derive(Clone, Default)]
pub struct CdCommand {
    resolver: PathResolver,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        if args.is_empty() {
            writeln!(ctx.out, "{}", ctx.state.current_dir().display())?;
            return Ok(CommandResult::success());
        }

        // Paths with spaces arrive split across tokens.
        let target = self
            .resolver
            .resolve(ctx.state.current_dir(), &args.join(" "));
        ctx.state.set_current_dir(target)?;

        tracing::debug!(dir = %ctx.state.current_dir().display(), "changed directory");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::super::FAILURE_CODE;
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_cd_no_args_prints_and_keeps_dir() {
        let (_dir, root) = setup();
        let mut fixture = Fixture::new(&root);

        let result = fixture.run(&CdCommand::new(), &[]).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(fixture.state.current_dir(), root);
        assert_eq!(fixture.output(), format!("{}\n", root.display()));
    }

    #[test]
    fn test_cd_relative() {
        let (_dir, root) = setup();
        fs::create_dir(root.join("sub")).unwrap();
        let mut fixture = Fixture::new(&root);

        fixture.run(&CdCommand::new(), &["sub"]).unwrap();
        assert_eq!(fixture.state.current_dir(), root.join("sub"));

        fixture.run(&CdCommand::new(), &[".."]).unwrap();
        assert_eq!(fixture.state.current_dir(), root);
    }

    #[test]
    fn test_cd_absolute() {
        let (_dir, root) = setup();
        fs::create_dir(root.join("elsewhere")).unwrap();
        let mut fixture = Fixture::new(&root);

        let target = root.join("elsewhere");
        fixture
            .run(&CdCommand::new(), &[target.to_str().unwrap()])
            .unwrap();
        assert_eq!(fixture.state.current_dir(), target);
    }

    #[test]
    fn test_cd_path_with_spaces() {
        let (_dir, root) = setup();
        fs::create_dir(root.join("my docs")).unwrap();
        let mut fixture = Fixture::new(&root);

        fixture.run(&CdCommand::new(), &["my", "docs"]).unwrap();
        assert_eq!(fixture.state.current_dir(), root.join("my docs"));
    }

    #[test]
    fn test_cd_missing_path_keeps_dir() {
        let (_dir, root) = setup();
        let mut fixture = Fixture::new(&root);

        let err = fixture
            .run(&CdCommand::new(), &["does-not-exist"])
            .unwrap_err();
        assert!(matches!(err, CommandError::PathNotFound(_)));
        assert_eq!(fixture.state.current_dir(), root);

        let result = err.into_result(&fixture.i18n);
        assert_eq!(result.exit_code, FAILURE_CODE);
        let message = result.message.unwrap();
        assert!(message.starts_with(fixture.i18n.text("cdPathNotFound")));
        assert!(message.ends_with("does-not-exist"));
    }

    #[test]
    fn test_cd_into_file_fails() {
        let (_dir, root) = setup();
        fs::write(root.join("file.txt"), "x").unwrap();
        let mut fixture = Fixture::new(&root);

        assert!(matches!(
            fixture.run(&CdCommand::new(), &["file.txt"]),
            Err(CommandError::PathNotFound(_))
        ));
        assert_eq!(fixture.state.current_dir(), root);
    }

    #[test]
    fn test_cd_home() {
        let (_dir, root) = setup();
        let mut fixture = Fixture::new(&root);

        if let Some(home) = dirs::home_dir().filter(|h| h.is_dir()) {
            fixture.run(&CdCommand::new(), &["~"]).unwrap();
            assert_eq!(fixture.state.current_dir(), fs::canonicalize(home).unwrap());
        }
    }
}
