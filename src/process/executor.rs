use std::env;
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use super::redirect::{RedirectPlan, Redirection};
use super::ProcessError;
use crate::flags::Flags;

/// Program run by the `ls` built-in.
pub const LS_PATH: &str = "/bin/ls";

#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Self {
        ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Runs one external command to completion. Redirection is stripped from
    /// `args` here and applied only inside the child.
    pub fn spawn_process(&self, args: &[String]) -> Result<ExitStatus, ProcessError> {
        let mut args = args.to_vec();
        let redirection = Redirection::extract(&mut args);

        let name = match args.first() {
            Some(name) => name.as_str(),
            None => return Err(ProcessError::EmptyCommand),
        };

        let program = resolve_executable(name)?;
        let plan = RedirectPlan::prepare(&redirection)?;

        let mut command = Command::new(&program);
        command.arg0(name).args(&args[1..]);
        // SAFETY: `apply` only calls open/dup2/close on pre-built C strings.
        unsafe {
            command.pre_exec(move || plan.apply());
        }

        self.run(command, name).map_err(|err| match err {
            ProcessError::Spawn { command, source }
                if !redirection.is_empty() && is_executable(&program) =>
            {
                blame_redirection(&redirection, command, source)
            }
            other => other,
        })
    }

    /// Lists the current directory one entry per line, without colour.
    pub fn run_ls(&self) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(LS_PATH);
        command.args(["-1", "--color=never"]).env("LANG", "C");
        self.run(command, "ls")
    }

    fn run(&self, mut command: Command, name: &str) -> Result<ExitStatus, ProcessError> {
        let mut child = command.spawn().map_err(|source| ProcessError::Spawn {
            command: name.to_string(),
            source,
        })?;
        log::debug!("spawned {} (pid {})", name, child.id());

        // `wait` keeps blocking through stops; only exit or a signal ends it.
        let status = child.wait().map_err(ProcessError::Wait)?;
        log::debug!("{} finished: {}", name, status);

        self.report(name, status);
        Ok(status)
    }

    fn report(&self, name: &str, status: ExitStatus) {
        if self.quiet_mode || status.success() {
            return;
        }
        if let Some(code) = status.code() {
            eprintln!("wsh: {}: exited with status {}", name, code);
        } else if let Some(signal) = status.signal() {
            eprintln!("wsh: {}: terminated by signal {}", name, signal);
        }
    }
}

/// The child only hands back an errno, so once the program itself is known to
/// be runnable a spawn failure is pinned on the redirection. An unreadable
/// input is checked first since it is opened first.
fn blame_redirection(
    redirection: &Redirection,
    command: String,
    source: std::io::Error,
) -> ProcessError {
    let path = match (&redirection.input, &redirection.output) {
        (Some(input), _) if std::fs::File::open(input).is_err() => input,
        (_, Some(output)) => output,
        (Some(input), None) => input,
        (None, None) => return ProcessError::Spawn { command, source },
    };
    ProcessError::Redirect {
        path: path.clone(),
        source,
    }
}

/// Finds the program for `name`: names containing `/` are used as given,
/// anything else is looked up in each `PATH` directory in order.
pub fn resolve_executable(name: &str) -> Result<PathBuf, ProcessError> {
    if name.contains('/') {
        return Ok(PathBuf::from(name));
    }
    if name.is_empty() {
        return Err(ProcessError::CommandNotFound(name.to_string()));
    }

    let path_var = env::var_os("PATH").ok_or(ProcessError::PathNotSet)?;
    search_path(name, &path_var.to_string_lossy())
        .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))
}

fn search_path(name: &str, path_var: &str) -> Option<PathBuf> {
    path_var
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(|dir| Path::new(dir).join(name))
        .find(|candidate| is_executable(candidate))
}

pub fn is_executable(path: &Path) -> bool {
    if path.is_dir() {
        return false;
    }
    match CString::new(path.as_os_str().as_bytes()) {
        Ok(c_path) => unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 },
        Err(_) => false,
    }
}
