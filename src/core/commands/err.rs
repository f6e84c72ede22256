use super::{Command, CommandError, CommandResult, ExecContext};

/// `err <code> [message...]`: finishes with any exit code and message.
#[derive(Clone, Default)]
pub struct ErrCommand;

impl Command for ErrCommand {
    fn execute(
        &self,
        args: &[String],
        _ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        let (code, message) = args
            .split_first()
            .ok_or(CommandError::MissingArgument("errMissingErrCode"))?;

        let exit_code = code
            .parse::<i32>()
            .map_err(|_| CommandError::InvalidArgument("errInvalidErrCode", code.clone()))?;

        let message = (!message.is_empty()).then(|| message.join(" "));
        Ok(CommandResult { exit_code, message })
    }
}
