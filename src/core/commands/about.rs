use super::{Command, CommandError, CommandResult, ExecContext};
use crate::highlight::ColorRole;

const YEARS: &str = "2024";
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const REPO_URL: &str = env!("CARGO_PKG_REPOSITORY");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints the banner; `--primitive` keeps it to the title line.
#[derive(Clone, Default)]
pub struct AboutCommand;

impl Command for AboutCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        let about = ctx.i18n.format("about", &[YEARS, AUTHOR, REPO_URL]);
        let mut lines = about.lines();
        let title = format!("{} {}", lines.next().unwrap_or_default(), VERSION);

        let styled = banner_line(ctx, &title);
        writeln!(ctx.out, "{}", styled)?;

        if args.iter().any(|arg| arg == "--primitive") {
            return Ok(CommandResult::success());
        }

        for line in lines {
            let styled = banner_line(ctx, line);
            writeln!(ctx.out, "{}", styled)?;
        }
        Ok(CommandResult::success())
    }
}

fn banner_line(ctx: &ExecContext<'_>, text: &str) -> String {
    let colors = &ctx.config.colors;
    ctx.painter.on(
        text,
        ColorRole::AboutForeground.color(colors),
        ColorRole::AboutBackground.color(colors),
    )
}
