//! # triangle-sema
//!
//! The symbol table, the resolved type system's standard environment, and
//! the single-pass semantic analyzer (C3/C4) for Triangle.
//!
//! [`Checker::check_program`] is the entry point: it walks a parsed
//! [`triangle_syntax::ast::Stmt`], annotates every typeable node's
//! resolved-type slot in place, and returns the [`SemanticError`]s found
//! along the way. An empty result means the tree is fully resolved and
//! ready for [`triangle_codegen`](../triangle_codegen/index.html).

pub mod binding;
pub mod checker;
pub mod error;
pub mod stdenv;
pub mod symbol_table;

pub use binding::{Binding, TermKind};
pub use checker::Checker;
pub use error::SemanticError;
pub use symbol_table::SymbolTable;
