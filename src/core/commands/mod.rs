mod cd;
mod exit;
mod export;
mod history;
mod local;
mod ls;
mod vars;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use export::ExportCommand;
pub use history::{replay_index, HistoryCommand};
pub use local::LocalCommand;
pub use ls::LsCommand;
pub use vars::VarsCommand;

use crate::core::env::EnvError;
use crate::core::state::ShellState;
use crate::input::history::HistoryError;
use crate::process::ProcessError;

/// Names of every built-in, in dispatch-table order.
pub const BUILTINS: [&str; 7] = ["cd", "exit", "export", "local", "vars", "history", "ls"];

/// What the driver should do after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    EnvError(EnvError),
    HistoryError(HistoryError),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::EnvError(err) => write!(f, "{}", err),
            CommandError::HistoryError(err) => write!(f, "{}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

impl From<HistoryError> for CommandError {
    fn from(err: HistoryError) -> Self {
        CommandError::HistoryError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// A built-in. `args` excludes the command name itself.
pub trait Command {
    fn execute(&self, args: &[String], state: &mut ShellState)
        -> Result<CommandStatus, CommandError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Export(ExportCommand),
    Local(LocalCommand),
    Vars(VarsCommand),
    History(HistoryCommand),
    Ls(LsCommand),
}

impl CommandType {
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "cd" => CommandType::Cd(CdCommand),
            "exit" => CommandType::Exit(ExitCommand),
            "export" => CommandType::Export(ExportCommand),
            "local" => CommandType::Local(LocalCommand),
            "vars" => CommandType::Vars(VarsCommand),
            "history" => CommandType::History(HistoryCommand),
            "ls" => CommandType::Ls(LsCommand),
            _ => return None,
        };
        Some(command)
    }
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Export(cmd) => cmd.execute(args, state),
            CommandType::Local(cmd) => cmd.execute(args, state),
            CommandType::Vars(cmd) => cmd.execute(args, state),
            CommandType::History(cmd) => cmd.execute(args, state),
            CommandType::Ls(cmd) => cmd.execute(args, state),
        }
    }
}

pub fn is_builtin(command: &str) -> bool {
    CommandType::from_name(command).is_some()
}

/// Splits `NAME=VALUE` and substitutes a `$NAME` value, as `local` and
/// `export` both require.
fn parse_assignment_arg(
    command: &str,
    args: &[String],
    state: &ShellState,
) -> Result<(String, String), CommandError> {
    let arg = args.first().ok_or_else(|| {
        CommandError::InvalidArguments(format!("{} requires an argument", command))
    })?;

    let (name, value) = crate::core::env::parse_assignment(arg).ok_or_else(|| {
        CommandError::InvalidArguments(format!("{} requires VAR=VALUE format", command))
    })?;

    if name.is_empty() {
        return Err(EnvError::EmptyName.into());
    }

    Ok((name.to_string(), state.vars.expand_value(value).into_owned()))
}
