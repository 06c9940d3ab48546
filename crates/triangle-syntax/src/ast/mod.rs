//! The Triangle AST: an arena-allocated, single-owner tree with interior
//! mutability on resolved-type slots only.

pub mod expr;
pub mod ident;
pub mod stmt;
pub mod typesig;

pub use expr::{Expr, ExprKind, ExprNode};
pub use ident::{Identifier, IdentifierKind, IdentifierNode};
pub use stmt::{
    Argument, DeclKind, DeclNode, Declaration, Parameter, ParameterKind, ParameterNode, Stmt,
    StmtKind, StmtNode,
};
pub use typesig::TypeSig;

use triangle_base::{Arena, Symbol};

/// One arena per node type, bundled so the parser (and everything
/// downstream) can carry a single `&'a Ast<'a>` around instead of five
/// separate arena references. Self-referential in the usual typed-arena
/// way: nodes allocated out of `self.exprs` etc. borrow `'a`, the same
/// lifetime as `&'a Ast<'a>` itself, so the arena must outlive every
/// reference into it, which a shared borrow already guarantees.
#[derive(Default)]
pub struct Ast<'a> {
    pub exprs: Arena<ExprNode<'a>>,
    pub stmts: Arena<StmtNode<'a>>,
    pub decls: Arena<DeclNode<'a>>,
    pub params: Arena<ParameterNode<'a>>,
    pub idents: Arena<IdentifierNode<'a>>,
    pub type_sigs: Arena<TypeSig<'a>>,
    pub type_sig_fields: Arena<(Symbol, TypeSig<'a>)>,

    // Arenas of references, backing the `&'a [_]` slices hung off the
    // node types above (bumpalo slice allocation needs each element's
    // final home to already be a stable reference).
    pub exprs_list: Arena<Expr<'a>>,
    pub expr_fields: Arena<(Symbol, Expr<'a>)>,
    pub stmts_list: Arena<Stmt<'a>>,
    pub decls_list: Arena<Declaration<'a>>,
    pub params_list: Arena<Parameter<'a>>,
    pub args_list: Arena<Argument<'a>>,
}

impl<'a> Ast<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}
