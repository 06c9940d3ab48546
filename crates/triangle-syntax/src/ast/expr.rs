//! Expressions (§3 data model).
//!
//! Every expression node carries a `RefCell<Option<Type>>` resolved-type
//! slot: the parser leaves it `None`, the checker fills it in exactly once
//! per node, and the code generator reads it back. This is the only
//! interior mutability in the tree — everything else about a node is fixed
//! at parse time.

use std::cell::RefCell;

use triangle_base::{Position, Symbol, Type};

use super::ident::Identifier;
use super::stmt::{Argument, Declaration, Stmt};

pub struct ExprNode<'a> {
    pub kind: ExprKind<'a>,
    pub position: Position,
    pub resolved_type: RefCell<Option<Type>>,
}

pub type Expr<'a> = &'a ExprNode<'a>;

pub enum ExprKind<'a> {
    LitInt(i64),
    LitChar(char),
    LitBool(bool),
    LitArray(&'a [Expr<'a>]),
    LitRecord(&'a [(Symbol, Expr<'a>)]),
    Identifier(Identifier<'a>),
    UnaryOp {
        op: Symbol,
        operand: Expr<'a>,
    },
    BinaryOp {
        op: Symbol,
        left: Expr<'a>,
        right: Expr<'a>,
    },
    FunCall {
        name: Symbol,
        args: &'a [Argument<'a>],
    },
    IfExpression {
        cond: Expr<'a>,
        then_branch: Expr<'a>,
        else_branch: Expr<'a>,
    },
    LetExpression {
        decls: &'a [Declaration<'a>],
        body: Expr<'a>,
    },
    /// A statement executed purely for effect, followed by the expression
    /// whose value the whole node takes on.
    SequenceExpression {
        stmt: Stmt<'a>,
        expr: Expr<'a>,
    },
}

impl<'a> ExprNode<'a> {
    pub fn new(kind: ExprKind<'a>, position: Position) -> Self {
        Self {
            kind,
            position,
            resolved_type: RefCell::new(None),
        }
    }
}
