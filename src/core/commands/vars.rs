use std::io::{self, Write};

use super::{Command, CommandError, CommandStatus};
use crate::core::env::ShellVars;
use crate::core::state::ShellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarsCommand;

impl VarsCommand {
    pub fn write_to(vars: &ShellVars, out: &mut impl Write) -> io::Result<()> {
        for var in vars.iter() {
            writeln!(out, "{}={}", var.name, var.value)?;
        }
        Ok(())
    }
}

impl Command for VarsCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandStatus, CommandError> {
        let mut stdout = io::stdout().lock();
        Self::write_to(&state.vars, &mut stdout)
            .and_then(|_| stdout.flush())
            .map_err(|e| CommandError::ExecutionError(format!("vars: {}", e)))?;
        Ok(CommandStatus::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vars_listing_order() {
        let mut vars = ShellVars::new();
        vars.set("FIRST", "1").unwrap();
        vars.set("SECOND", "two words").unwrap();
        vars.set("FIRST", "updated").unwrap();

        let mut out = Vec::new();
        VarsCommand::write_to(&vars, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "FIRST=updated\nSECOND=two words\n"
        );
    }

    #[test]
    fn test_vars_empty() {
        let mut out = Vec::new();
        VarsCommand::write_to(&ShellVars::new(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
