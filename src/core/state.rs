use std::process::ExitStatus;

use crate::core::env::ShellVars;
use crate::flags::Flags;
use crate::input::History;
use crate::process::ProcessExecutor;

/// Mutable state shared by the engine and the built-ins for one shell session.
#[derive(Debug, Default)]
pub struct ShellState {
    pub vars: ShellVars,
    pub history: History,
    pub process: ProcessExecutor,
    pub last_status: Option<ExitStatus>,
}

impl ShellState {
    pub fn new(flags: &Flags) -> Self {
        Self {
            vars: ShellVars::new(),
            history: History::default(),
            process: ProcessExecutor::new(flags),
            last_status: None,
        }
    }
}
