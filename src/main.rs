use expl::error::ShellError;
use expl::flags::Flags;
use expl::logging;
use expl::shell::Shell;
use std::env;
use std::process::ExitCode;

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("expl {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(flags.is_set("debug"))?;

    let mut shell = Shell::new(flags)?;
    shell.run()
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("expl: {}", e);
            ExitCode::FAILURE
        }
    }
}
