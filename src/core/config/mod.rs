use std::fmt;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::{ConfigPaths, RC_FILE_NAME};

use crate::flags::Flags;

/// Start-up configuration: which rc file, if any, runs before input.
#[derive(Debug, Clone)]
pub struct Config {
    paths: Option<ConfigPaths>,
}

impl Config {
    /// `--norc` disables the rc file, `--config FILE` replaces it.
    pub fn from_flags(flags: &Flags) -> Result<Self, ConfigError> {
        if flags.is_set("norc") {
            return Ok(Config { paths: None });
        }

        let paths = match flags.get_value("config") {
            Some(path) => ConfigPaths::with_rc(path),
            None => ConfigPaths::new()?,
        };
        Ok(Config { paths: Some(paths) })
    }

    pub fn rc_lines(&self) -> Result<Vec<String>, ConfigError> {
        match &self.paths {
            Some(paths) => ConfigLoader::new(paths).load_lines(),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    IoError(String, std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::IoError(path, e) => write!(f, "{}: {}", path, e),
        }
    }
}

impl std::error::Error for ConfigError {}
