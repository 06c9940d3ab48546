use std::fmt;

use triangle_base::Position;

/// A fatal codegen-stage problem. Unlike [`triangle_sema::SemanticError`],
/// this is never accumulated — a program nested more than six routines
/// deep has no display register left to address it with, so generation
/// stops at the first offending declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenError {
    NestingTooDeep { position: Position, depth: u8 },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::NestingTooDeep { position, depth } => write!(
                f,
                "{position}: routine nesting depth {depth} exceeds the 6 display registers available"
            ),
        }
    }
}

impl std::error::Error for CodegenError {}
