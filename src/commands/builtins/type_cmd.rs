use crate::commands::registry::{Command, ExitStatus, BUILTINS};
use crate::context::ExecutionContext;
use crate::errors::ShellResult;
use crate::streams::Streams;

pub struct TypeCommand;

impl Command for TypeCommand {
    fn name(&self) -> &'static str {
        "type"
    }

    fn description(&self) -> &'static str {
        "Print the type of a command"
    }

    fn run(
        &self,
        args: &[String],
        _ctx: &ExecutionContext,
        streams: &mut Streams<'_>,
    ) -> ShellResult<ExitStatus> {
        let Some(name) = args.first() else {
            writeln!(streams.error, "type: usage: type name")?;
            return Ok(1);
        };

        // every session registry carries the same names as the global one
        if BUILTINS.is_builtin(name) {
            writeln!(streams.output, "{} is a shell builtin", name)?;
            return Ok(0);
        }

        writeln!(streams.error, "{}: not found", name)?;
        Ok(1)
    }
}
