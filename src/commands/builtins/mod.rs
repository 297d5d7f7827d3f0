mod cat;
mod echo;
mod exit;
mod pwd;
mod type_cmd;

pub use cat::ConcatCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_cmd::TypeCommand;
