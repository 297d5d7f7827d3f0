use crate::context::ExecutionContext;
use crate::errors::ShellResult;
use crate::resolver::ResolutionRule;
use clap::Parser;
use std::path::PathBuf;

/// Shell command line arguments
#[derive(Parser, Debug)]
#[command(name = "catsh")]
#[command(about = "A small shell built around a fault-tolerant cat", long_about = None)]
pub struct ShellArgs {
    /// Run a single command line and exit with its status
    #[arg(short = 'c', value_name = "COMMAND")]
    pub command: Option<String>,

    /// How file arguments are placed against the tracked working directory
    #[arg(
        long,
        value_enum,
        env = "SHELL_PATH_RULE",
        default_value_t = ResolutionRule::ReplaceFinal
    )]
    pub path_rule: ResolutionRule,

    /// Start with this tracked working directory instead of the process directory
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

impl ShellArgs {
    pub fn config(&self) -> ShellConfig {
        ShellConfig {
            rule: self.path_rule,
            cwd: self.cwd.clone(),
        }
    }
}

/// Settings shared by the interactive and one-shot modes
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    pub rule: ResolutionRule,
    pub cwd: Option<PathBuf>,
}

impl ShellConfig {
    /// Initial context for a session
    pub fn context(&self) -> ShellResult<ExecutionContext> {
        match &self.cwd {
            Some(dir) => Ok(ExecutionContext::with_cwd(dir)),
            None => ExecutionContext::from_process(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_replace_final() {
        let args = ShellArgs::try_parse_from(["catsh"]).unwrap();
        assert_eq!(args.path_rule, ResolutionRule::ReplaceFinal);
        assert!(args.command.is_none());
    }

    #[test]
    fn parses_one_shot_command_and_rule() {
        let args = ShellArgs::try_parse_from([
            "catsh",
            "--path-rule",
            "append",
            "--cwd",
            "/srv",
            "-c",
            "cat a.txt",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.rule, ResolutionRule::Append);
        assert_eq!(args.command.as_deref(), Some("cat a.txt"));
        assert_eq!(config.context().unwrap().cwd().unwrap(), "/srv/");
    }

    #[test]
    fn rejects_unknown_rule() {
        assert!(ShellArgs::try_parse_from(["catsh", "--path-rule", "sideways"]).is_err());
    }
}
