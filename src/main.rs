use std::{env, path::Path, process::ExitCode};

use wsh::core::{commands::CommandStatus, config::Config};
use wsh::error::ShellError;
use wsh::flags::Flags;
use wsh::shell::{open_script, Shell};

fn init_logging(flags: &Flags) {
    let default_filter = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    let positional = flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("wsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&flags);

    if positional.len() > 1 {
        return Err(ShellError::TooManyArgs);
    }

    let script = positional.first().map(|path| open_script(Path::new(path))).transpose()?;

    let mut shell = Shell::new(&flags);

    match Config::from_flags(&flags) {
        Ok(config) => {
            if shell.load_rc(&config) == CommandStatus::Exit {
                return Ok(());
            }
        }
        Err(e) => log::warn!("skipping rc file: {}", e),
    }

    match script {
        Some(script) => shell.run_reader(script),
        None => shell.run_interactive(),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wsh: {}", e);
            ExitCode::FAILURE
        }
    }
}
