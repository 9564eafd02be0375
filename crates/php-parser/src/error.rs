use thiserror::Error;

/// The failure result of a parse.
///
/// Lexical errors (stray bytes, unterminated literals), syntactic errors
/// (the grammar rejected a token) and resource errors all collapse into this
/// one record: a human-readable message and the 1-based source line it was
/// detected on. The first error terminates the parse; no partial tree is
/// exposed.
///
/// ## Example
/// ```rust
/// use php_parser::Parser;
///
/// let err = Parser::new("<?php if(").parse().unwrap_err();
/// assert_eq!(err.line(), 1);
/// assert!(err.message().starts_with("syntax error"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} on line {line}")]
pub struct SyntaxError {
    pub(crate) message: String,
    pub(crate) line: u32,
}

impl SyntaxError {
    pub(crate) fn new<S: Into<String>>(message: S, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }

    /// The human-readable description of what went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The 1-based line of the token that triggered the error.
    pub fn line(&self) -> u32 {
        self.line
    }
}
