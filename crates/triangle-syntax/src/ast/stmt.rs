//! Statements, declarations, parameters and call arguments (§3 data model).

use std::cell::RefCell;

use triangle_base::{Position, Symbol, Type};

use super::expr::Expr;
use super::ident::Identifier;
use super::typesig::TypeSig;

pub struct StmtNode<'a> {
    pub kind: StmtKind<'a>,
    pub position: Position,
}

pub type Stmt<'a> = &'a StmtNode<'a>;

pub enum StmtKind<'a> {
    Block(&'a [Stmt<'a>]),
    Let {
        decls: &'a [Declaration<'a>],
        body: Stmt<'a>,
    },
    If {
        cond: Expr<'a>,
        consequent: Option<Stmt<'a>>,
        alternative: Option<Stmt<'a>>,
    },
    While {
        cond: Expr<'a>,
        body: Stmt<'a>,
    },
    /// `loop <loop_body> while <cond> do <do_body>`: the TAM dialect's
    /// three-part loop, distinct from plain `while`/`repeat`.
    LoopWhile {
        loop_body: Stmt<'a>,
        cond: Expr<'a>,
        do_body: Stmt<'a>,
    },
    RepeatWhile {
        body: Stmt<'a>,
        cond: Expr<'a>,
    },
    RepeatUntil {
        body: Stmt<'a>,
        cond: Expr<'a>,
    },
    Assign {
        target: Identifier<'a>,
        value: Expr<'a>,
    },
    /// A procedure call or any other expression evaluated for effect and
    /// discarded.
    Expression(Expr<'a>),
    Noop,
}

impl<'a> StmtNode<'a> {
    pub fn new(kind: StmtKind<'a>, position: Position) -> Self {
        Self { kind, position }
    }
}

pub struct DeclNode<'a> {
    pub kind: DeclKind<'a>,
    pub position: Position,
    /// For `Const`/`Var`: the declared value's type. For `Type`: the type
    /// the name now denotes. For `Proc`/`Func`: the callable's signature
    /// (`Type::Func`), filled in once so recursive calls can look it up
    /// without re-resolving the parameter list.
    pub resolved_type: RefCell<Option<Type>>,
}

pub type Declaration<'a> = &'a DeclNode<'a>;

pub enum DeclKind<'a> {
    Const {
        name: Symbol,
        value: Expr<'a>,
    },
    Var {
        name: Symbol,
        type_sig: TypeSig<'a>,
    },
    Type {
        name: Symbol,
        type_sig: TypeSig<'a>,
    },
    Proc {
        name: Symbol,
        params: &'a [Parameter<'a>],
        body: Stmt<'a>,
    },
    Func {
        name: Symbol,
        params: &'a [Parameter<'a>],
        return_type_sig: TypeSig<'a>,
        body: Expr<'a>,
    },
}

impl<'a> DeclNode<'a> {
    pub fn new(kind: DeclKind<'a>, position: Position) -> Self {
        Self {
            kind,
            position,
            resolved_type: RefCell::new(None),
        }
    }
}

pub struct ParameterNode<'a> {
    pub kind: ParameterKind<'a>,
    pub position: Position,
    pub resolved_type: RefCell<Option<Type>>,
}

pub type Parameter<'a> = &'a ParameterNode<'a>;

pub enum ParameterKind<'a> {
    Value {
        name: Symbol,
        type_sig: TypeSig<'a>,
    },
    Var {
        name: Symbol,
        type_sig: TypeSig<'a>,
    },
    /// A callable parameter. `return_type_sig: None` means it accepts a
    /// `proc`-shaped argument; `Some(_)` means a `func`-shaped one.
    Func {
        name: Symbol,
        params: &'a [Parameter<'a>],
        return_type_sig: Option<TypeSig<'a>>,
    },
}

impl<'a> ParameterNode<'a> {
    pub fn new(kind: ParameterKind<'a>, position: Position) -> Self {
        Self {
            kind,
            position,
            resolved_type: RefCell::new(None),
        }
    }

    pub fn name(&self) -> Symbol {
        match &self.kind {
            ParameterKind::Value { name, .. }
            | ParameterKind::Var { name, .. }
            | ParameterKind::Func { name, .. } => *name,
        }
    }
}

/// An argument at a call site.
///
/// `var` arguments have their own explicit keyword in the grammar, so the
/// parser can tell them apart from a plain expression. A callable argument
/// (matching a `Parameter::Func`) has no such marker — written as a bare
/// name, it parses exactly like an identifier expression — so the parser
/// always produces `Expression` for it; the checker is the one that knows,
/// from the matching parameter's kind, that a bare-identifier expression
/// argument there names a declared procedure or function rather than a
/// value.
pub enum Argument<'a> {
    Expression(Expr<'a>),
    VarArgument(Identifier<'a>),
}
