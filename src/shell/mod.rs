use std::{
    borrow::Cow,
    env,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

mod environment;
mod executor;

pub use environment::{normalize_line, parse_line, tokenize};

use crate::{
    core::{commands::CommandStatus, config::Config, state::ShellState},
    error::ShellError,
    flags::Flags,
    input::ShellCompleter,
};

use executor::CommandHandler;

/// `PATH` every session starts with, whatever the parent environment held.
pub const DEFAULT_PATH: &str = "/bin";
pub const PROMPT: &str = "wsh> ";

pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) replaying: bool,
}

impl Shell {
    pub fn new(flags: &Flags) -> Self {
        env::set_var("PATH", DEFAULT_PATH);
        log::debug!("PATH set to {}", DEFAULT_PATH);

        Shell {
            state: ShellState::new(flags),
            replaying: false,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs one raw input line. Errors are reported and swallowed; only the
    /// returned status tells the caller whether to keep reading.
    pub fn run_line(&mut self, line: &str) -> CommandStatus {
        let Some(line) = filter_line(line) else {
            return CommandStatus::Continue;
        };

        match self.execute_command(line) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("wsh: {}", e);
                CommandStatus::Continue
            }
        }
    }

    /// Runs the rc file's lines before any other input.
    pub fn load_rc(&mut self, config: &Config) -> CommandStatus {
        let lines = match config.rc_lines() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("wsh: {}", e);
                return CommandStatus::Continue;
            }
        };

        for line in lines {
            if self.run_line(&line) == CommandStatus::Exit {
                return CommandStatus::Exit;
            }
        }
        CommandStatus::Continue
    }

    /// Batch mode: no prompt, one command per line until end of input or
    /// `exit`.
    pub fn run_reader(&mut self, mut reader: impl BufRead) -> Result<(), ShellError> {
        let mut buf = Vec::new();
        let mut line_number = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                log::warn!(
                    "line {}: invalid UTF-8 replaced with U+FFFD",
                    line_number
                );
            }
            if self.run_line(&line) == CommandStatus::Exit {
                return Ok(());
            }
        }
    }

    pub fn run_interactive(&mut self) -> Result<(), ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));

        loop {
            if let Some(helper) = editor.helper_mut() {
                helper.refresh_if_path_changed();
            }

            match editor.readline(PROMPT) {
                Ok(line) => {
                    if filter_line(&line).is_some() {
                        if let Err(e) = editor.add_history_entry(line.as_str()) {
                            log::warn!("couldn't add to line-editor history: {}", e);
                        }
                    }
                    if self.run_line(&line) == CommandStatus::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// Opens a batch script. Done before any rc line runs, so a bad script path
/// fails start-up with nothing executed.
pub fn open_script(path: &Path) -> Result<BufReader<File>, ShellError> {
    let file =
        File::open(path).map_err(|e| ShellError::Script(path.display().to_string(), e))?;
    log::debug!("opened script {}", path.display());
    Ok(BufReader::new(file))
}

/// Strips surrounding spaces and tabs; blank lines and `#` comments yield
/// `None`.
pub fn filter_line(line: &str) -> Option<&str> {
    let line = line.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line)
    }
}
