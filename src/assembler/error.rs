//! Errors raised while lexing Hack assembly.
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Classification was attempted on a blank or comment-only line.
    EmptyInstruction,
    /// The source could not be read at the given (1-based) line.
    Read { line: usize, source: io::Error },
    /// A compute instruction whose delimiters do not fit `[dest=]comp[;jump]`.
    Malformed { line: String },
    /// The reader gave up after this many failing lines.
    Aborted { errors: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyInstruction => write!(f, "empty instruction"),
            Error::Read { line, source } => write!(f, "unable to read line {}: {}", line, source),
            Error::Malformed { line } => write!(f, "malformed compute instruction `{}`", line),
            Error::Aborted { errors } => write!(f, "stopped due to {} lexer error(s)", errors),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
