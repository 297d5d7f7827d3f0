use catsh::{run_command, run_shell, ShellArgs};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = ShellArgs::parse();
    let config = args.config();

    let result = match &args.command {
        Some(line) => run_command(&config, line),
        None => run_shell(&config),
    };

    match result {
        // statuses wrap modulo 256, as in other shells
        Ok(code) => ExitCode::from((code & 0xff) as u8),
        Err(e) => {
            eprintln!("catsh: {}", e);
            ExitCode::FAILURE
        }
    }
}
