use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::fs;

/// Tab completion of builtin names and of files in the tracked directory
#[derive(Clone)]
pub struct ShellCompleter {
    commands: Vec<&'static str>,
    cwd: String,
}

impl ShellCompleter {
    pub fn new(commands: Vec<&'static str>, cwd: &str) -> Self {
        Self {
            commands,
            cwd: cwd.to_string(),
        }
    }

    fn command_candidates(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }

    fn file_candidates(&self, prefix: &str) -> Vec<Pair> {
        let Ok(entries) = fs::read_dir(&self.cwd) else {
            return Vec::new();
        };

        entries
            .flatten()
            .filter_map(|entry| {
                let file_name = entry.file_name().into_string().ok()?;
                if !file_name.starts_with(prefix) {
                    return None;
                }
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                let replacement = if is_dir {
                    format!("{}/", file_name)
                } else {
                    file_name.clone()
                };
                Some(Pair {
                    display: file_name,
                    replacement,
                })
            })
            .collect()
    }

    /// Candidates for the word ending at `pos`, and where that word starts
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let input = &line[..pos];
        let start = input.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let prefix = &input[start..];

        let mut candidates = if input[..start].trim().is_empty() {
            self.command_candidates(prefix)
        } else {
            self.file_candidates(prefix)
        };

        // Remove duplicates and sort
        candidates.sort_by(|a, b| a.display.cmp(&b.display));
        candidates.dedup_by(|a, b| a.display == b.display);

        // If there's exactly one plain match, add a trailing space
        if candidates.len() == 1 && !candidates[0].replacement.ends_with('/') {
            candidates[0].replacement.push(' ');
        }

        (start, candidates)
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.replacement.as_str()).collect()
    }

    #[test]
    fn completes_command_names() {
        let completer = ShellCompleter::new(vec!["cat", "echo", "exit"], "/");
        let (start, pairs) = completer.candidates("e", 1);
        assert_eq!(start, 0);
        assert_eq!(names(&pairs), ["echo", "exit"]);

        let (_, pairs) = completer.candidates("ca", 2);
        assert_eq!(names(&pairs), ["cat "]);
    }

    #[test]
    fn completes_files_in_tracked_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("alpha.txt"), "").unwrap();
        fs::write(dir.path().join("beta.txt"), "").unwrap();
        fs::create_dir(dir.path().join("archive")).unwrap();
        let completer = ShellCompleter::new(vec!["cat"], dir.path().to_str().unwrap());

        let line = "cat a";
        let (start, pairs) = completer.candidates(line, line.len());
        assert_eq!(start, 4);
        assert_eq!(names(&pairs), ["alpha.txt", "archive/"]);

        let line = "cat x.txt b";
        let (_, pairs) = completer.candidates(line, line.len());
        assert_eq!(names(&pairs), ["beta.txt "]);
    }
}
