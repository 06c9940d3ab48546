//! # triangle-codegen
//!
//! Lowers a checked Triangle AST into a TAM-shaped object file: the IR
//! generator (C5) walks the tree once, emitting a symbolic instruction
//! stream; the backpatcher and object writer (C6) resolve labels and
//! serialize the result.
//!
//! [`compile`] is the entry point the CLI drives.

pub mod backpatch;
pub mod error;
pub mod generate;
pub mod instr;
pub mod writer;

use std::io::{self, Write};

use triangle_base::Interner;
use triangle_syntax::ast::Stmt;

pub use error::CodegenError;
pub use generate::Generator;
pub use instr::TamInstr;

/// Runs the full codegen pipeline (C5 + C6) over a checked program and
/// writes the resulting object bytes to `out`.
pub fn compile<W: Write>(
    program: Stmt<'_>,
    interner: &mut Interner,
    out: &mut W,
) -> Result<(), CompileError> {
    let items = Generator::new(interner).generate_program(program)?;
    let instructions = backpatch::resolve(items);
    writer::write(&instructions, out)?;
    Ok(())
}

#[derive(Debug)]
pub enum CompileError {
    Codegen(CodegenError),
    Io(io::Error),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Codegen(e) => write!(f, "{e}"),
            CompileError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<CodegenError> for CompileError {
    fn from(e: CodegenError) -> Self {
        CompileError::Codegen(e)
    }
}

impl From<io::Error> for CompileError {
    fn from(e: io::Error) -> Self {
        CompileError::Io(e)
    }
}
