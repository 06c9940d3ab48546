use std::fmt;

use triangle_base::{Position, Symbol};

/// A single semantic problem. Unlike [`triangle_syntax::SyntaxError`],
/// these are accumulated rather than fatal: the checker recovers at the
/// next statement boundary and keeps looking for more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    Undeclared {
        name: Symbol,
        position: Position,
    },
    DuplicateDeclaration {
        name: Symbol,
        position: Position,
    },
    NotAssignable {
        name: Symbol,
        position: Position,
    },
    TypeMismatch {
        expected: String,
        found: String,
        position: Position,
    },
    NotCallable {
        name: Symbol,
        position: Position,
    },
    ArgumentCountMismatch {
        name: Symbol,
        expected: usize,
        found: usize,
        position: Position,
    },
    ArgumentKindMismatch {
        name: Symbol,
        position: Position,
        message: String,
    },
    NotAnArray {
        position: Position,
    },
    NotARecord {
        position: Position,
    },
    NoSuchField {
        field: Symbol,
        position: Position,
    },
    DuplicateField {
        field: Symbol,
        position: Position,
    },
}

impl SemanticError {
    pub fn position(&self) -> Position {
        match self {
            SemanticError::Undeclared { position, .. }
            | SemanticError::DuplicateDeclaration { position, .. }
            | SemanticError::NotAssignable { position, .. }
            | SemanticError::TypeMismatch { position, .. }
            | SemanticError::NotCallable { position, .. }
            | SemanticError::ArgumentCountMismatch { position, .. }
            | SemanticError::ArgumentKindMismatch { position, .. }
            | SemanticError::NotAnArray { position }
            | SemanticError::NotARecord { position }
            | SemanticError::NoSuchField { position, .. }
            | SemanticError::DuplicateField { position, .. } => *position,
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticError::Undeclared { position, .. } => {
                write!(f, "{position}: undeclared identifier")
            }
            SemanticError::DuplicateDeclaration { position, .. } => {
                write!(f, "{position}: duplicate declaration in this scope")
            }
            SemanticError::NotAssignable { position, .. } => {
                write!(f, "{position}: cannot assign to a constant or value parameter")
            }
            SemanticError::TypeMismatch {
                expected,
                found,
                position,
            } => write!(f, "{position}: expected {expected}, found {found}"),
            SemanticError::NotCallable { position, .. } => {
                write!(f, "{position}: not a procedure or function")
            }
            SemanticError::ArgumentCountMismatch {
                expected,
                found,
                position,
                ..
            } => write!(
                f,
                "{position}: expected {expected} argument(s), found {found}"
            ),
            SemanticError::ArgumentKindMismatch {
                position, message, ..
            } => write!(f, "{position}: {message}"),
            SemanticError::NotAnArray { position } => {
                write!(f, "{position}: subscript applied to a non-array value")
            }
            SemanticError::NotARecord { position } => {
                write!(f, "{position}: field access applied to a non-record value")
            }
            SemanticError::NoSuchField { position, .. } => {
                write!(f, "{position}: no such field")
            }
            SemanticError::DuplicateField { position, .. } => {
                write!(f, "{position}: duplicate field name in record")
            }
        }
    }
}

impl std::error::Error for SemanticError {}
