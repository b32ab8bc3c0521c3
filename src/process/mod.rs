use std::fmt;

pub mod executor;
pub mod redirect;

pub use executor::ProcessExecutor;
pub use redirect::{operator_prefix, Redirection};

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    EmptyCommand,
    PathNotSet,
    InvalidArgument(String),
    Spawn { command: String, source: std::io::Error },
    Redirect { path: String, source: std::io::Error },
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::EmptyCommand => write!(f, "missing command before redirection"),
            ProcessError::PathNotSet => write!(f, "PATH not set"),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Spawn { command, source } => write!(f, "{}: {}", command, source),
            ProcessError::Redirect { path, source } => {
                write!(f, "redirection failed: {}: {}", path, source)
            }
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } | ProcessError::Redirect { source, .. } => {
                Some(source)
            }
            ProcessError::Wait(e) => Some(e),
            _ => None,
        }
    }
}
