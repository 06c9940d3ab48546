//! Unresolved type signatures, as written by the programmer.
//!
//! `TypeSig` is what the parser produces; it carries no resolved sizes or
//! semantic meaning. The checker turns it into a [`triangle_base::Type`] by
//! looking up named types in scope (see the sibling `triangle-sema` crate).

use triangle_base::{Position, Symbol};

/// A type signature as written: either a name to be looked up, or a
/// structural `array`/`record` signature built from nested signatures.
#[derive(Debug, Clone, Copy)]
pub enum TypeSig<'a> {
    /// A named type (`Integer`, `Boolean`, or a user `type` declaration).
    /// Carries its own position so "undeclared type" errors can point at
    /// the name rather than at the enclosing declaration.
    Named(Symbol, Position),
    Array {
        size: u32,
        element: &'a TypeSig<'a>,
    },
    Record(&'a [(Symbol, TypeSig<'a>)]),
    /// The absence of a return type signature on a `proc` or a callable
    /// `proc`-shaped parameter.
    Void,
}
