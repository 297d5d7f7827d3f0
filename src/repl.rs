use crate::cli::ShellConfig;
use crate::commands::{builtin_registry, CommandRegistry, ExitStatus};
use crate::completion::ShellCompleter;
use crate::context::{ExecutionContext, STATUS_VAR};
use crate::errors::{ShellError, ShellResult};
use crate::streams::Streams;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{ColorMode, CompletionType, Config, Editor};
use std::io;
use tracing::{info, warn};

/// What the interpreter should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(ExitStatus),
    Exit(i32),
}

/// Handle a command input line
pub fn handle_command_input(
    input: &str,
    registry: &CommandRegistry,
    ctx: &ExecutionContext,
    streams: &mut Streams<'_>,
) -> ShellResult<Flow> {
    let args = shell_words::split(input).map_err(|_| ShellError::InvalidQuoting)?;

    let Some((name, rest)) = args.split_first() else {
        return Ok(Flow::Continue(0));
    };

    if let Some(code) = registry.check_exit(name, rest) {
        info!(code, "exit requested");
        return Ok(Flow::Exit(code));
    }

    info!(command = name.as_str(), args = rest.len(), "dispatching builtin");
    match registry.execute(name, rest, ctx, streams) {
        Some(result) => result.map(Flow::Continue),
        None => Err(ShellError::CommandNotFound(format!(
            "{}: command not found",
            name
        ))),
    }
}

/// Interpreter state that lives across command lines
pub struct Session {
    registry: CommandRegistry,
    ctx: ExecutionContext,
}

impl Session {
    pub fn new(config: &ShellConfig) -> ShellResult<Self> {
        Ok(Self {
            registry: builtin_registry(config.rule),
            ctx: config.context()?,
        })
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.ctx
    }

    /// Run one line, presenting any command error on the error stream and
    /// recording the resulting status in `$?`.
    pub fn execute(&mut self, line: &str, streams: &mut Streams<'_>) -> ShellResult<Flow> {
        let flow = match handle_command_input(line, &self.registry, &self.ctx, streams) {
            Ok(flow) => flow,
            Err(ShellError::Fatal(msg)) => {
                warn!("command failed");
                streams.error.write_all(msg.as_bytes())?;
                Flow::Continue(1)
            }
            Err(e) => {
                warn!(error = %e, "command failed");
                writeln!(streams.error, "{}", e)?;
                Flow::Continue(1)
            }
        };
        streams.error.flush()?;

        if let Flow::Continue(status) = flow {
            self.ctx.set(STATUS_VAR, status.to_string());
        }
        Ok(flow)
    }
}

fn with_std_streams<T>(f: impl FnOnce(&mut Streams<'_>) -> T) -> T {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let (mut output, mut error) = (io::stdout(), io::stderr());
    f(&mut Streams::new(&mut input, &mut output, &mut error))
}

/// Read lines with rustyline until EOF or `exit`, returning the exit status
pub fn run_interactive(config: &ShellConfig) -> ShellResult<i32> {
    let mut session = Session::new(config)?;

    let editor_config = Config::builder()
        .color_mode(ColorMode::Enabled)
        .auto_add_history(true)
        .build();

    let mut rl: Editor<ShellCompleter, DefaultHistory> = Editor::with_config(editor_config)
        .map_err(|e| {
            ShellError::InputError(format!("Failed to create readline editor: {}", e))
        })?;

    rl.set_helper(Some(ShellCompleter::new(
        session.registry.builtin_names(),
        session.context().cwd()?,
    )));
    rl.set_completion_type(CompletionType::List);

    let mut last_status = 0;
    loop {
        let line = match rl.readline("$ ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C pressed, continue loop
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D pressed, exit gracefully
                return Ok(last_status);
            }
            Err(e) => {
                return Err(ShellError::InputError(format!("Readline error: {}", e)));
            }
        };

        match with_std_streams(|streams| session.execute(line.trim(), streams))? {
            Flow::Continue(status) => last_status = status,
            Flow::Exit(code) => return Ok(code),
        }
    }
}

/// Run a single line against the process's standard streams
pub fn run_line(config: &ShellConfig, line: &str) -> ShellResult<i32> {
    let mut session = Session::new(config)?;

    Ok(match with_std_streams(|streams| session.execute(line, streams))? {
        Flow::Continue(status) => status,
        Flow::Exit(code) => code,
    })
}
