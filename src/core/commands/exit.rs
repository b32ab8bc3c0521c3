use super::{Command, CommandError, CommandStatus};
use crate::core::state::ShellState;

/// Asks the driver to stop. State is released when the driver drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "exit takes no arguments".to_string(),
            ));
        }
        Ok(CommandStatus::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_command() {
        let mut state = ShellState::default();
        assert_eq!(
            ExitCommand.execute(&[], &mut state).unwrap(),
            CommandStatus::Exit
        );
    }

    #[test]
    fn test_exit_rejects_arguments() {
        let mut state = ShellState::default();
        assert!(matches!(
            ExitCommand.execute(&["0".to_string()], &mut state),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
