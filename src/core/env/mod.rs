mod vars;

pub use vars::{ShellVars, Variable};

#[derive(Debug)]
pub enum EnvError {
    EmptyName,
    InvalidName(String),
    InvalidValue(&'static str),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::EmptyName => write!(f, "variable name cannot be empty"),
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {}", name),
            EnvError::InvalidValue(val) => write!(f, "invalid value: {}", val),
        }
    }
}

impl std::error::Error for EnvError {}

/// Splits a `NAME=VALUE` assignment on the first `=`.
pub fn parse_assignment(arg: &str) -> Option<(&str, &str)> {
    arg.split_once('=')
}

/// Sets a process environment variable, rejecting names and values the
/// platform cannot represent.
pub fn export_var(name: &str, value: &str) -> Result<(), EnvError> {
    if name.is_empty() {
        return Err(EnvError::EmptyName);
    }
    if name.contains(['=', '\0']) {
        return Err(EnvError::InvalidName(name.to_string()));
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue("value contains a NUL byte"));
    }

    log::debug!("export {}={}", name, value);
    std::env::set_var(name, value);
    Ok(())
}
