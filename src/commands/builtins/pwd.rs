use crate::commands::registry::{Command, ExitStatus};
use crate::context::ExecutionContext;
use crate::errors::ShellResult;
use crate::streams::Streams;
use std::path::MAIN_SEPARATOR;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print the tracked working directory"
    }

    fn run(
        &self,
        _args: &[String],
        ctx: &ExecutionContext,
        streams: &mut Streams<'_>,
    ) -> ShellResult<ExitStatus> {
        // the tracked value is a directory marker; drop the trailing separator
        let marker = ctx.cwd()?;
        let cwd = match marker.trim_end_matches(MAIN_SEPARATOR) {
            "" => marker,
            trimmed => trimmed,
        };
        writeln!(streams.output, "{}", cwd)?;
        Ok(0)
    }
}
