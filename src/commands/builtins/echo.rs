use crate::commands::registry::{Command, ExitStatus};
use crate::context::ExecutionContext;
use crate::errors::ShellResult;
use crate::streams::Streams;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Echo arguments to stdout"
    }

    fn run(
        &self,
        args: &[String],
        _ctx: &ExecutionContext,
        streams: &mut Streams<'_>,
    ) -> ShellResult<ExitStatus> {
        writeln!(streams.output, "{}", args.join(" "))?;
        Ok(0)
    }
}
