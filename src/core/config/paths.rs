use super::ConfigError;
use std::path::PathBuf;

pub const RC_FILE_NAME: &str = ".wshrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
}

impl ConfigPaths {
    /// `$HOME/.wshrc`.
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_rc(home.join(RC_FILE_NAME)))
    }

    pub fn with_rc(rc_path: impl Into<PathBuf>) -> Self {
        ConfigPaths {
            rc_path: rc_path.into(),
        }
    }
}
