pub mod cli;
pub mod commands;
pub mod completion;
pub mod context;
pub mod errors;
pub mod probe;
pub mod repl;
pub mod resolver;
pub mod streams;

pub use cli::{ShellArgs, ShellConfig};
use errors::ShellResult;

/// Main entry point for the shell REPL
pub fn run_shell(config: &ShellConfig) -> ShellResult<i32> {
    repl::run_interactive(config)
}

/// Run one command line (the `-c` mode) and return its status
pub fn run_command(config: &ShellConfig, line: &str) -> ShellResult<i32> {
    repl::run_line(config, line)
}
