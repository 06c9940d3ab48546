//! Identifiers: simple names, record field access, and array subscripts.
//!
//! An identifier is the one AST shape used both as a value-producing
//! expression (`Expr::Identifier`) and as an assignable location
//! (`Stmt::Assign`'s target), which is why it is its own node rather than
//! folded into `Expr`.

use std::cell::RefCell;

use triangle_base::{Position, Symbol, Type};

use super::expr::Expr;

pub struct IdentifierNode<'a> {
    pub kind: IdentifierKind<'a>,
    pub position: Position,
    pub resolved_type: RefCell<Option<Type>>,
}

pub type Identifier<'a> = &'a IdentifierNode<'a>;

pub enum IdentifierKind<'a> {
    Basic(Symbol),
    RecordAccess {
        record: Identifier<'a>,
        field: Symbol,
    },
    ArraySubscript {
        array: Identifier<'a>,
        subscript: Expr<'a>,
    },
}

impl<'a> IdentifierNode<'a> {
    pub fn new(kind: IdentifierKind<'a>, position: Position) -> Self {
        Self {
            kind,
            position,
            resolved_type: RefCell::new(None),
        }
    }

    /// The leftmost simple name: `a` for `a`, `a.f`, and `a[0]` alike. Used
    /// to find which entry in the symbol table an access ultimately reads
    /// or writes.
    pub fn root(&self) -> Symbol {
        match &self.kind {
            IdentifierKind::Basic(name) => *name,
            IdentifierKind::RecordAccess { record, .. } => record.root(),
            IdentifierKind::ArraySubscript { array, .. } => array.root(),
        }
    }
}
