use std::{fs, path::Path};

use rustyline::completion::Pair;

/// File-name candidates for arguments and redirection targets.
#[derive(Clone, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    /// Completes the final path component of `word`, keeping whatever
    /// directory part the user already typed.
    pub fn complete_path(&self, word: &str) -> Vec<Pair> {
        let (dir_part, prefix) = match word.rfind('/') {
            Some(idx) => word.split_at(idx + 1),
            None => ("", word),
        };
        let search_dir = if dir_part.is_empty() { "." } else { dir_part };

        let Ok(entries) = fs::read_dir(Path::new(search_dir)) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                // dotfiles only when asked for
                if !name.starts_with(prefix) || (name.starts_with('.') && !prefix.starts_with('.')) {
                    return None;
                }
                let candidate = format!("{}{}", dir_part, name);
                let pair = if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", candidate),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", candidate),
                    }
                };
                Some(pair)
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
