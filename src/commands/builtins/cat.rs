use crate::commands::registry::{Command, ExitStatus};
use crate::context::ExecutionContext;
use crate::errors::{ShellError, ShellResult};
use crate::probe::{FileProbe, OsProbe};
use crate::resolver::{PathResolver, Resolution};
use crate::streams::Streams;
use std::io;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a single argument produced no content
#[derive(Error, Debug)]
enum Failure {
    #[error("No such file or directory")]
    NotFound,

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Is a directory")]
    IsDirectory,

    #[error("{}", plain_reason(.0))]
    Read(io::Error),
}

/// `io::Error` text without the trailing `(os error N)`
fn plain_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rsplit_once(" (os error ") {
        Some((reason, _)) if err.raw_os_error().is_some() => reason.to_string(),
        _ => text,
    }
}

/// `cat`: concatenate files, or copy input to output when given no files.
///
/// Arguments that cannot be read are reported inline and counted. If every
/// argument fails the whole invocation fails with the collected diagnostics
/// as the error message, and nothing is printed.
pub struct ConcatCommand<P = OsProbe> {
    resolver: PathResolver,
    probe: P,
}

impl ConcatCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self::with_probe(resolver, OsProbe)
    }
}

impl<P: FileProbe> ConcatCommand<P> {
    pub fn with_probe(resolver: PathResolver, probe: P) -> Self {
        Self { resolver, probe }
    }

    fn read_one(&self, cwd: &str, arg: &str) -> Result<Vec<u8>, Failure> {
        let path = match self.resolver.resolve_in(cwd, arg, &self.probe) {
            Resolution::Found(path) => path,
            Resolution::NotFound => return Err(Failure::NotFound),
        };
        if !self.probe.readable(&path) {
            return Err(Failure::PermissionDenied);
        }
        if self.probe.is_dir(&path) {
            return Err(Failure::IsDirectory);
        }
        self.probe.read_all(&path).map_err(Failure::Read)
    }

    fn copy_input(&self, streams: &mut Streams<'_>) -> ShellResult<ExitStatus> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if streams.input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            streams.output.write_all(&line)?;
        }
        streams.output.flush()?;
        Ok(0)
    }

    fn concat_files(
        &self,
        args: &[String],
        ctx: &ExecutionContext,
        streams: &mut Streams<'_>,
    ) -> ShellResult<ExitStatus> {
        let cwd = ctx.cwd()?;

        let mut result = Vec::new();
        let mut errors = String::new();
        let mut error_count = 0;

        for arg in args {
            match self.read_one(cwd, arg) {
                Ok(contents) => {
                    result.extend_from_slice(&contents);
                    result.push(b'\n');
                }
                Err(failure) => {
                    debug!(arg = arg.as_str(), %failure, "cat argument failed");
                    error_count += 1;
                    let line = format!("{}: {}\n", arg, failure);
                    result.extend_from_slice(line.as_bytes());
                    errors.push_str(&line);
                }
            }
        }

        if error_count == args.len() {
            warn!(count = error_count, "cat: every argument failed");
            return Err(ShellError::Fatal(
                String::from_utf8_lossy(&result).into_owned(),
            ));
        }

        streams.output.write_all(&result)?;
        streams.output.flush()?;
        if !errors.is_empty() {
            streams.error.write_all(errors.as_bytes())?;
            streams.error.flush()?;
        }

        Ok(if error_count > 0 { 1 } else { 0 })
    }
}

impl<P: FileProbe + Send + Sync> Command for ConcatCommand<P> {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn description(&self) -> &'static str {
        "Concatenate files and print them"
    }

    fn run(
        &self,
        args: &[String],
        ctx: &ExecutionContext,
        streams: &mut Streams<'_>,
    ) -> ShellResult<ExitStatus> {
        if args.is_empty() {
            self.copy_input(streams)
        } else {
            self.concat_files(args, ctx, streams)
        }
    }
}
