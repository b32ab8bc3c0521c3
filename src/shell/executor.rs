use super::environment::{normalize_line, parse_line};
use crate::core::commands::{replay_index, Command, CommandError, CommandStatus, CommandType};

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<CommandStatus, CommandError>;
    fn execute_args(&mut self, line: &str, args: &[String])
        -> Result<CommandStatus, CommandError>;
    fn replay_history(&mut self, number: usize) -> Result<CommandStatus, CommandError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<CommandStatus, CommandError> {
        let args = parse_line(line, &self.state.vars);
        self.execute_args(line, &args)
    }

    /// `line` is the unsubstituted source of `args`; it is what history keeps.
    fn execute_args(
        &mut self,
        line: &str,
        args: &[String],
    ) -> Result<CommandStatus, CommandError> {
        let Some(name) = args.first() else {
            return Ok(CommandStatus::Continue);
        };

        if name == "history" {
            if let Some(number) = args.get(1).and_then(|arg| replay_index(arg)) {
                return self.replay_history(number);
            }
        }

        if let Some(builtin) = CommandType::from_name(name) {
            return builtin.execute(&args[1..], &mut self.state);
        }

        self.state.history.add(&normalize_line(line));

        let status = self.state.process.spawn_process(args)?;
        self.state.last_status = Some(status);
        Ok(CommandStatus::Continue)
    }

    fn replay_history(&mut self, number: usize) -> Result<CommandStatus, CommandError> {
        // Owned copy: running the entry may rewrite the ring.
        let Some(entry) = self.state.history.get(number).map(str::to_owned) else {
            log::debug!("history {} out of range, ignoring", number);
            return Ok(CommandStatus::Continue);
        };

        if self.replaying {
            return Err(CommandError::ExecutionError(format!(
                "history: entry {} replays history again",
                number
            )));
        }

        log::debug!("replaying history {}: {}", number, entry);
        self.replaying = true;
        let result = self.execute_command(&entry);
        self.replaying = false;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags;
    use crate::shell::Shell;
    use serial_test::serial;
    use std::fs;

    fn shell() -> Shell {
        let mut flags = Flags::new();
        flags.parse(&["--quiet".to_string()]).unwrap();
        Shell::new(&flags)
    }

    fn history_lines(shell: &Shell) -> Vec<String> {
        shell
            .state
            .history
            .iter_recent()
            .map(|(_, line)| line.to_string())
            .collect()
    }

    #[test]
    #[serial]
    fn test_empty_line_is_a_no_op() {
        let mut shell = shell();
        assert_eq!(
            shell.execute_command("   ").unwrap(),
            CommandStatus::Continue
        );
        assert!(shell.state.history.is_empty());
    }

    #[test]
    #[serial]
    fn test_builtins_are_not_recorded() {
        let mut shell = shell();
        shell.execute_command("local A=1").unwrap();
        shell.execute_command("vars").unwrap();
        shell.execute_command("history").unwrap();
        assert!(shell.state.history.is_empty());
    }

    #[test]
    #[serial]
    fn test_external_commands_are_recorded_before_substitution() {
        let mut shell = shell();
        shell.execute_command("local GREETING=hi").unwrap();
        shell.execute_command("true   $GREETING").unwrap();
        shell.execute_command("true $GREETING").unwrap();
        assert_eq!(history_lines(&shell), vec!["true $GREETING"]);
        assert!(shell.state.last_status.is_some_and(|s| s.success()));
    }

    #[test]
    #[serial]
    fn test_failing_command_is_still_recorded() {
        let mut shell = shell();
        let result = shell.execute_command("no-such-command-wsh");
        assert!(matches!(result, Err(CommandError::ProcessError(_))));
        assert_eq!(history_lines(&shell), vec!["no-such-command-wsh"]);
    }

    #[test]
    #[serial]
    fn test_history_keeps_last_capacity_entries() {
        let mut shell = shell();
        for n in 1..=7 {
            shell.execute_command(&format!("true {}", n)).unwrap();
        }
        assert_eq!(
            history_lines(&shell),
            vec!["true 7", "true 6", "true 5", "true 4", "true 3"]
        );
    }

    #[test]
    #[serial]
    fn test_replay_runs_entry_and_rerecords_it() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("replay.txt");
        let mut shell = shell();

        shell
            .execute_command(&format!("echo again >>{}", out.display()))
            .unwrap();
        shell.execute_command("true").unwrap();
        shell.execute_command("history 2").unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "again\nagain\n");
        assert_eq!(history_lines(&shell)[0], format!("echo again >>{}", out.display()));
        assert_eq!(shell.state.history.len(), 3);
    }

    #[test]
    #[serial]
    fn test_replay_out_of_range_is_silent() {
        let mut shell = shell();
        shell.execute_command("true").unwrap();
        for line in ["history 2", "history 99", "history 0", "history -1"] {
            assert_eq!(
                shell.execute_command(line).unwrap(),
                CommandStatus::Continue
            );
        }
        assert_eq!(history_lines(&shell), vec!["true"]);
    }

    #[test]
    #[serial]
    fn test_replay_resubstitutes_and_refuses_to_recurse() {
        let mut shell = shell();
        shell.execute_command("local CMD=true").unwrap();
        shell.execute_command("$CMD 1").unwrap();
        shell.execute_command("local CMD=history").unwrap();
        // entry 1 now expands to `history 1`, i.e. itself
        let result = shell.execute_command("history 1");
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
        assert!(!shell.replaying);
        assert_eq!(history_lines(&shell), vec!["$CMD 1"]);
    }

    #[test]
    #[serial]
    fn test_exit_signals_stop() {
        let mut shell = shell();
        assert_eq!(shell.execute_command("exit").unwrap(), CommandStatus::Exit);
        assert!(shell.execute_command("exit now").is_err());
    }
}
