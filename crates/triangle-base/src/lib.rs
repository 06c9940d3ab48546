//! # triangle-base
//!
//! Structural atoms shared by every stage of the Triangle compiler:
//!
//! - [`Arena`] — bump allocation for stable AST references
//! - [`Interner`]/[`Symbol`] — string interning for O(1) name equality
//! - [`Position`]/[`Span`] — source location tracking
//! - [`Type`] — the resolved type system, shared by the AST's resolved-type
//!   slots, the checker that populates them, and the code generator that
//!   reads them
//!
//! This crate knows nothing about Triangle's grammar; it is the foundation
//! the parser, checker and code generator all build on.

pub mod arena;
pub mod intern;
pub mod position;
pub mod types;

pub use arena::Arena;
pub use intern::{Interner, Symbol};
pub use position::{Position, Span};
pub use types::Type;
