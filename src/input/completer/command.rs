use std::{collections::BTreeSet, env, fs};

use rustyline::completion::Pair;

use crate::core::commands::BUILTINS;
use crate::process::executor::is_executable;

/// Command-name candidates: the built-ins plus every executable on `PATH`.
#[derive(Clone, Debug)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
    path_snapshot: Option<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let mut completer = Self {
            commands: BTreeSet::new(),
            path_snapshot: None,
        };
        completer.refresh_commands();
        completer
    }

    pub fn refresh_commands(&mut self) {
        self.commands.clear();
        self.commands.extend(BUILTINS.iter().map(|name| name.to_string()));

        self.path_snapshot = env::var("PATH").ok();
        let Some(path_var) = self.path_snapshot.clone() else {
            return;
        };

        for dir in path_var.split(':').filter(|dir| !dir.is_empty()) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if !is_executable(&entry.path()) {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    /// Rescans only when `PATH` changed since the last scan.
    pub fn refresh_if_path_changed(&mut self) {
        if env::var("PATH").ok() != self.path_snapshot {
            log::debug!("PATH changed, rescanning commands");
            self.refresh_commands();
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}

impl Default for CommandCompleter {
    fn default() -> Self {
        Self::new()
    }
}
