use crate::context::ExecutionContext;
use crate::errors::ShellResult;
use crate::probe::FileProbe;
use clap::ValueEnum;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::debug;

/// How an argument is placed against the tracked working directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResolutionRule {
    /// Substitute the argument for the final component of the tracked path.
    /// A directory marker (`/a/b/`) has an empty final component, so the
    /// argument lands inside it.
    #[default]
    ReplaceFinal,
    /// Always treat the argument as a child of the tracked path
    Append,
}

/// Outcome of resolving one argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(PathBuf),
    NotFound,
}

/// Maps raw arguments to the paths a command should open.
///
/// The argument is first tried against the interpreter's tracked directory,
/// then as given (relative to the process directory, or absolute). There is
/// no third attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver {
    rule: ResolutionRule,
}

impl PathResolver {
    pub fn new(rule: ResolutionRule) -> Self {
        Self { rule }
    }

    /// Resolve `arg` against the context's tracked directory
    pub fn resolve(
        &self,
        arg: &str,
        ctx: &ExecutionContext,
        probe: &dyn FileProbe,
    ) -> ShellResult<Resolution> {
        let cwd = ctx.cwd()?;
        Ok(self.resolve_in(cwd, arg, probe))
    }

    /// Resolve `arg` against an already-read tracked directory
    pub fn resolve_in(&self, cwd: &str, arg: &str, probe: &dyn FileProbe) -> Resolution {
        // an empty name would otherwise resolve to the tracked directory itself
        if arg.is_empty() {
            debug!(cwd, "empty argument");
            return Resolution::NotFound;
        }

        let tracked = self.candidate(cwd, arg);
        if probe.exists(&tracked) {
            debug!(arg, path = %tracked.display(), "resolved against tracked directory");
            return Resolution::Found(tracked);
        }

        let direct = PathBuf::from(arg);
        if probe.exists(&direct) {
            debug!(arg, "resolved as given");
            return Resolution::Found(direct);
        }

        debug!(arg, cwd, "no such file");
        Resolution::NotFound
    }

    fn candidate(&self, cwd: &str, arg: &str) -> PathBuf {
        match self.rule {
            ResolutionRule::Append => Path::new(cwd).join(arg),
            ResolutionRule::ReplaceFinal => {
                if cwd.is_empty() || cwd.ends_with(MAIN_SEPARATOR) {
                    Path::new(cwd).join(arg)
                } else {
                    Path::new(cwd).with_file_name(arg)
                }
            }
        }
    }
}
