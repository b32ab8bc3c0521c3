use std::{fs, io, path::Path};

use super::{ConfigError, ConfigPaths};
use crate::shell::filter_line;

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Command lines from the rc file, comments and blanks removed. A missing
    /// file yields no lines.
    pub fn load_lines(&self) -> Result<Vec<String>, ConfigError> {
        self.read_if_exists(&self.paths.rc_path)
    }

    fn read_if_exists(&self, path: &Path) -> Result<Vec<String>, ConfigError> {
        let content = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ConfigError::IoError(path.display().to_string(), e)),
        };

        log::debug!("loading rc file {}", path.display());
        Ok(String::from_utf8_lossy(&content)
            .lines()
            .filter_map(filter_line)
            .map(str::to_owned)
            .collect())
    }
}
