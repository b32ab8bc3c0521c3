#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch working directory plus an isolated `HOME`.
pub struct ShellFixture {
    temp: TempDir,
    home: PathBuf,
}

impl ShellFixture {
    pub fn new() -> Self {
        let temp = tempfile::Builder::new()
            .prefix("wsh-test-")
            .tempdir()
            .expect("failed to create temp dir");
        let home = temp.path().join("home");
        fs::create_dir_all(&home).expect("failed to create HOME fixture");
        Self { temp, home }
    }

    pub fn dir(&self) -> &Path {
        self.temp.path()
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write fixture file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("fixture file contents")
    }

    /// The shell binary, run from the fixture directory without an rc file.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("wsh").expect("wsh binary");
        cmd.current_dir(self.dir())
            .env("HOME", &self.home)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Writes `script` and returns a command that runs it in batch mode.
    pub fn script(&self, script: &str) -> Command {
        let path = self.write("script.wsh", script);
        let mut cmd = self.command();
        cmd.arg("--norc").arg(path);
        cmd
    }
}
