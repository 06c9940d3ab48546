//! What a name in the term scope actually is, beyond just its `Type`.
//!
//! The type alone can't tell an assignable `var` from a read-only `const`,
//! or a declared `func` from a `func` parameter waiting to be supplied at
//! a call site — and the checker needs exactly those distinctions to
//! enforce var-argument/func-argument legality and assignability.

use triangle_base::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Const,
    Var,
    ValueParam,
    VarParam,
    FuncParam,
    Proc,
    Func,
}

impl TermKind {
    pub fn is_assignable(self) -> bool {
        matches!(self, TermKind::Var | TermKind::VarParam)
    }

    pub fn accepts_var_argument(self) -> bool {
        matches!(self, TermKind::Var | TermKind::VarParam)
    }

    pub fn is_callable(self) -> bool {
        matches!(self, TermKind::Proc | TermKind::Func | TermKind::FuncParam)
    }
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub kind: TermKind,
    pub ty: Type,
}

impl Binding {
    pub fn new(kind: TermKind, ty: Type) -> Self {
        Self { kind, ty }
    }
}
