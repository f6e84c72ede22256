use super::{Command, CommandError, CommandResult, ExecContext};

#[derive(Clone, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        writeln!(ctx.out, "{}", args.join(" "))?;
        Ok(CommandResult::success())
    }
}
