pub mod builtins;
pub mod registry;

pub use registry::{builtin_registry, Command, CommandRegistry, ExitStatus, BUILTINS};
