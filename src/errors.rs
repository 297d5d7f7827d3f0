use std::io;
use thiserror::Error;

/// Comprehensive error type for shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{0}")]
    CommandNotFound(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    /// A command judged its invocation unusable. The payload is the text the
    /// command would have printed.
    #[error("{0}")]
    Fatal(String),

    #[error("Invalid quoting in command")]
    InvalidQuoting,
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_message_is_shown_verbatim() {
        let err = ShellError::Fatal("a: No such file or directory\n".to_string());
        assert_eq!(err.to_string(), "a: No such file or directory\n");
    }

    #[test]
    fn io_errors_convert() {
        let err: ShellError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ShellError::IoError(_)));
    }
}
