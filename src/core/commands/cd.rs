use super::{Command, CommandError, CommandStatus};
use crate::core::state::ShellState;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        let path = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("expected argument to \"cd\"".to_string())
        })?;

        env::set_current_dir(path)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}: {}", path, e)))?;

        log::debug!("cwd is now {}", path);
        Ok(CommandStatus::Continue)
    }
}
