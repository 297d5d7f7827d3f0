use crate::errors::{ShellError, ShellResult};
use std::collections::HashMap;
use std::env;
use std::path::{Path, MAIN_SEPARATOR};

/// Name of the variable holding the tracked working directory
pub const CWD_VAR: &str = "PWD";

/// Name of the variable holding the status of the last command
pub const STATUS_VAR: &str = "?";

/// Interpreter variables visible to a running command.
///
/// Commands only ever see `&ExecutionContext`; the interpreter owns the value
/// and is the only place that calls [`ExecutionContext::set`].
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    vars: HashMap<String, String>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose tracked directory is `dir`, stored as a directory marker
    /// (always ending with the path separator).
    pub fn with_cwd(dir: impl AsRef<Path>) -> Self {
        let mut ctx = Self::new();
        ctx.set(CWD_VAR, directory_marker(dir.as_ref()));
        ctx
    }

    /// Context tracking the process's own current directory
    pub fn from_process() -> ShellResult<Self> {
        let dir = env::current_dir()?;
        Ok(Self::with_cwd(dir))
    }

    /// Look up a variable
    pub fn get(&self, name: &str) -> ShellResult<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ShellError::UndefinedVariable(name.to_string()))
    }

    /// The tracked working directory
    pub fn cwd(&self) -> ShellResult<&str> {
        self.get(CWD_VAR)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

fn directory_marker(dir: &Path) -> String {
    let mut marker = dir.to_string_lossy().into_owned();
    if !marker.ends_with(MAIN_SEPARATOR) {
        marker.push(MAIN_SEPARATOR);
    }
    marker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_undefined() {
        let ctx = ExecutionContext::new();
        match ctx.get("HOME") {
            Err(ShellError::UndefinedVariable(name)) => assert_eq!(name, "HOME"),
            other => panic!("expected UndefinedVariable, got {:?}", other),
        }
        assert!(ctx.cwd().is_err());
    }

    #[test]
    fn cwd_is_stored_as_directory_marker() {
        let ctx = ExecutionContext::with_cwd("/srv/data");
        assert_eq!(ctx.cwd().unwrap(), "/srv/data/");

        let ctx = ExecutionContext::with_cwd("/srv/data/");
        assert_eq!(ctx.cwd().unwrap(), "/srv/data/");
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut ctx = ExecutionContext::with_cwd("/tmp");
        ctx.set(STATUS_VAR, "0");
        ctx.set(STATUS_VAR, "1");
        assert_eq!(ctx.get(STATUS_VAR).unwrap(), "1");
    }

    #[test]
    fn from_process_tracks_current_dir() {
        let ctx = ExecutionContext::from_process().unwrap();
        let expected = env::current_dir().unwrap();
        assert_eq!(Path::new(ctx.cwd().unwrap()), expected.as_path());
    }
}
