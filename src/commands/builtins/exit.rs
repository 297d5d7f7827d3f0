use crate::commands::registry::{Command, ExitStatus};
use crate::context::ExecutionContext;
use crate::errors::ShellResult;
use crate::streams::Streams;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the shell"
    }

    fn run(
        &self,
        _args: &[String],
        _ctx: &ExecutionContext,
        _streams: &mut Streams<'_>,
    ) -> ShellResult<ExitStatus> {
        // Exit is handled via exit_code(), this won't normally be called
        Ok(0)
    }

    fn exit_code(&self, args: &[String]) -> Option<i32> {
        let code = args.first().and_then(|s| s.parse().ok()).unwrap_or(0);
        Some(code)
    }
}
