use std::fmt;

use triangle_base::Position;

/// A parse failure. Syntax errors are fatal: the parser stops at the
/// first one rather than trying to recover and keep going (unlike the
/// checker, which recovers at statement boundaries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub position: Position,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at {}: {}", self.position, self.message)
    }
}

impl std::error::Error for SyntaxError {}
