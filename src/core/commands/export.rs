use super::{parse_assignment_arg, Command, CommandError, CommandStatus};
use crate::core::env::export_var;
use crate::core::state::ShellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportCommand;

impl Command for ExportCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        let (name, value) = parse_assignment_arg("export", args, state)?;
        export_var(&name, &value)?;
        Ok(CommandStatus::Continue)
    }
}
