use std::io::{BufRead, Write};

/// Standard streams handed to a command for the duration of one call.
///
/// Input is line-oriented, output and error are plain byte sinks, so the same
/// command works against the terminal, files or in-memory buffers.
pub struct Streams<'a> {
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
    pub error: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
        error: &'a mut dyn Write,
    ) -> Self {
        Self {
            input,
            output,
            error,
        }
    }
}
