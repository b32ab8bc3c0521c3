use super::{Command, CommandError, CommandStatus};
use crate::core::state::ShellState;

/// Plain directory listing of the working directory. Arguments are accepted
/// but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        let status = state.process.run_ls()?;
        state.last_status = Some(status);
        Ok(CommandStatus::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ls_records_status() {
        let mut state = ShellState::default();
        let status = LsCommand
            .execute(&["--ignored".to_string()], &mut state)
            .unwrap();
        assert_eq!(status, CommandStatus::Continue);
        assert!(state.last_status.is_some_and(|s| s.success()));
    }
}
