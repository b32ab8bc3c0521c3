use std::io::{self, Write};

use super::{Command, CommandError, CommandStatus};
use crate::core::state::ShellState;
use crate::input::History;

/// `history`, `history set N`. Replaying `history N` is done by the engine
/// before built-in dispatch; other arguments are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn write_to(history: &History, out: &mut impl Write) -> io::Result<()> {
        for (number, line) in history.iter_recent() {
            writeln!(out, "{}) {}", number, line)?;
        }
        Ok(())
    }

    fn show(&self, state: &ShellState) -> Result<(), CommandError> {
        let mut stdout = io::stdout().lock();
        Self::write_to(&state.history, &mut stdout)
            .and_then(|_| stdout.flush())
            .map_err(|e| CommandError::ExecutionError(format!("history: {}", e)))
    }

    fn set_capacity(&self, args: &[String], state: &mut ShellState) -> Result<(), CommandError> {
        let value = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("history set requires a number".to_string())
        })?;
        let capacity = value.parse::<i64>().map_err(|_| {
            CommandError::InvalidArguments("history set requires a positive integer".to_string())
        })?;
        state.history.set_capacity(capacity)?;
        Ok(())
    }
}

impl Command for HistoryCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        match args.first().map(String::as_str) {
            None => self.show(state)?,
            Some("set") => self.set_capacity(&args[1..], state)?,
            Some(other) => log::debug!("history: ignoring argument {:?}", other),
        }
        Ok(CommandStatus::Continue)
    }
}

/// Parses a `history N` argument; only strictly positive numbers replay.
pub fn replay_index(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok().filter(|&n| n > 0)
}
