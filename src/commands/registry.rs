use super::builtins::{ConcatCommand, EchoCommand, ExitCommand, PwdCommand, TypeCommand};
use crate::context::ExecutionContext;
use crate::errors::ShellResult;
use crate::resolver::{PathResolver, ResolutionRule};
use crate::streams::Streams;
use once_cell::sync::Lazy;

/// Status returned by a command that ran to completion
pub type ExitStatus = i32;

/// Trait that all builtin commands must implement
pub trait Command: Send + Sync {
    /// The command name (e.g., "cat", "echo", "pwd")
    fn name(&self) -> &'static str;

    /// Help text / description for the command
    fn description(&self) -> &'static str;

    /// Run the command.
    ///
    /// `args` excludes the command name. `Ok(0)` is full success, any other
    /// status a partial or command-specific failure. `Err` means the
    /// invocation was unusable; a command returning `Err` has written nothing
    /// to `streams.output`.
    fn run(
        &self,
        args: &[String],
        ctx: &ExecutionContext,
        streams: &mut Streams<'_>,
    ) -> ShellResult<ExitStatus>;

    /// Whether this command should cause the shell to exit
    /// Returns Some(exit_code) if shell should exit, None otherwise
    fn exit_code(&self, _args: &[String]) -> Option<i32> {
        None
    }
}

/// Central registry for all builtin commands
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn register<C: Command + 'static>(&mut self, cmd: C) {
        self.commands.push(Box::new(cmd));
    }

    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Check if a command name is a builtin
    pub fn is_builtin(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Get all builtin command names (for completion and type command)
    pub fn builtin_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Execute a builtin command by name
    pub fn execute(
        &self,
        name: &str,
        args: &[String],
        ctx: &ExecutionContext,
        streams: &mut Streams<'_>,
    ) -> Option<ShellResult<ExitStatus>> {
        self.find(name).map(|c| c.run(args, ctx, streams))
    }

    /// Check if command should exit the shell
    pub fn check_exit(&self, name: &str, args: &[String]) -> Option<i32> {
        self.find(name).and_then(|c| c.exit_code(args))
    }
}

/// Registry holding every builtin, with `cat` resolving paths by `rule`
pub fn builtin_registry(rule: ResolutionRule) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Register all builtins here - SINGLE POINT OF REGISTRATION
    registry.register(ConcatCommand::new(PathResolver::new(rule)));
    registry.register(EchoCommand);
    registry.register(PwdCommand);
    registry.register(TypeCommand);
    registry.register(ExitCommand);

    registry
}

/// Global registry instance, using the default resolution rule
pub static BUILTINS: Lazy<CommandRegistry> =
    Lazy::new(|| builtin_registry(ResolutionRule::default()));
