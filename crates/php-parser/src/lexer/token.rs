use crate::lexer::TokenKind;
use std::fmt;

/// A single lexical atom, borrowing its text from the source buffer.
///
/// Tokens are produced in program order. Whitespace and comments are part of
/// the stream but are never handed to the parser; the same holds for the
/// interior pieces of interpolated string literals.
#[derive(Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub(crate) kind: TokenKind,
    pub(crate) data: &'a str,
    pub(crate) index: usize,
    pub(crate) line: u32,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, data: &'a str, index: usize, line: u32) -> Self {
        Self {
            kind,
            data,
            index,
            line,
        }
    }

    /// Get a reference to the token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get a reference to the token's data: the exact source slice.
    pub fn data(&self) -> &'a str {
        self.data
    }

    /// Byte offset of the first byte of this token in the source.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the first byte of this token in the source.
    pub fn start_offset(&self) -> usize {
        self.index
    }

    /// Byte offset of the last byte of this token, inclusive.
    pub fn end_offset(&self) -> usize {
        self.index + self.data.len().max(1) - 1
    }

    /// 1-based line of the token's first byte.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{} {:?}",
            self.kind.name(),
            self.index,
            self.index + self.data.len(),
            self.data
        )
    }
}
