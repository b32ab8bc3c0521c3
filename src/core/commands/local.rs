use super::{parse_assignment_arg, Command, CommandError, CommandStatus};
use crate::core::state::ShellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalCommand;

impl Command for LocalCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        let (name, value) = parse_assignment_arg("local", args, state)?;
        state.vars.set(&name, &value)?;
        Ok(CommandStatus::Continue)
    }
}
