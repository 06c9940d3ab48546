//! The IR generator (C5): lowers a checked AST into the symbolic
//! instruction stream consumed by [`crate::backpatch`].
//!
//! Split by grammar area, the same way `triangle-syntax`'s parser is split
//! into one module per construct: [`stmt`] lowers commands, [`expr`]
//! lowers expressions, [`decl`] allocates declarations and routine bodies,
//! [`call`] implements the call convention, and [`location`] computes
//! runtime addresses for identifiers.

mod call;
mod decl;
mod expr;
mod location;
mod stmt;

use triangle_base::{Interner, Symbol};
use triangle_sema::SymbolTable;
use triangle_syntax::ast::Stmt;

use crate::error::CodegenError;
use crate::instr::{Item, LabelCounter, LabelId, Op, Operand, PseudoInstr, Primitive, Register};

/// Where a variable lives: a stack offset relative to the display register
/// of the frame at `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VarEntry {
    pub offset: i32,
    pub level: usize,
}

/// What calling a name actually does, resolved once at the declaration
/// site and looked up again at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Callable {
    /// A user `proc`/`func`, called via its code label. `level` is the
    /// static nesting depth of the scope it was declared in.
    Static { label: LabelId, level: usize },
    /// A standard-environment operation, called via `Register::Pb` plus
    /// an ordinal rather than a label.
    Primitive(Primitive),
    /// A `func`/`proc` parameter: the two-word closure `{staticLink,
    /// codeAddr}` lives at `offset` in the frame at `level`.
    Dynamic { offset: i32, level: usize },
}

/// Link data size: static link, dynamic link, return address, exactly as
/// every routine's activation record reserves before its first local.
const LINK_DATA_SIZE: i32 = 3;

/// The closure size of a `func`/`proc`-typed argument or parameter: one
/// word for the static link, one for the code address. This is distinct
/// from `Type::Func`'s own `footprint()` (0, since a callable has no
/// runtime representation as a *value* outside of a parameter slot).
const CLOSURE_FOOTPRINT: i32 = 2;

pub struct Generator<'i> {
    interner: &'i mut Interner,
    variables: SymbolTable<VarEntry>,
    callables: SymbolTable<Callable>,
    level: usize,
    current_offset: i32,
    labels: LabelCounter,
    code: Vec<Item>,
}

impl<'i> Generator<'i> {
    /// Binary/unary operators never go through this table — `BinaryOp`/
    /// `UnaryOp` dispatch straight to a primitive by operator text (see
    /// `generate::expr`), since the same operator symbol can denote two
    /// different primitives depending on arity. Only `FunCall`-position
    /// names (standard I/O procedures, user `proc`/`func`s) live here.
    pub fn new(interner: &'i mut Interner) -> Self {
        let mut callables = SymbolTable::new();
        let putint = interner.intern("putint");
        let put = interner.intern("put");
        let getint = interner.intern("getint");
        let get = interner.intern("get");
        let puteol = interner.intern("puteol");
        callables.add(putint, Callable::Primitive(Primitive::PutInt));
        callables.add(put, Callable::Primitive(Primitive::Put));
        callables.add(getint, Callable::Primitive(Primitive::GetInt));
        callables.add(get, Callable::Primitive(Primitive::Get));
        callables.add(puteol, Callable::Primitive(Primitive::PutEol));

        Self {
            interner,
            variables: SymbolTable::new(),
            callables,
            level: 0,
            current_offset: 0,
            labels: LabelCounter::new(),
            code: Vec::new(),
        }
    }

    /// Lowers the whole program: the user's top-level command, a `HALT`,
    /// and a trailing compiler-generated block of helpers (label ids
    /// allocated starting from 0, ahead of any user-code label) that the
    /// standard environment's `|` relies on.
    pub fn generate_program(mut self, program: Stmt<'_>) -> Result<Vec<Item>, CodegenError> {
        let abs_symbol = self.interner.intern("|");
        let abs_label = self.labels.next();
        self.callables
            .add(abs_symbol, Callable::Static { label: abs_label, level: 0 });

        self.gen_command(program)?;
        self.emit(Op::Halt, Register::Cb, 0, Operand::Known(0));

        self.place_label(abs_label);
        self.emit(Op::Load, Register::Lb, 1, Operand::Known(-1));
        self.emit(Op::LoadL, Register::Cb, 0, Operand::Known(100));
        self.emit(
            Op::CallPrim,
            Register::Pb,
            0,
            Operand::Known(Primitive::Mult.ordinal()),
        );
        self.emit(Op::Return, Register::Cb, 1, Operand::Known(1));

        log::debug!("codegen produced {} items", self.code.len());
        Ok(self.code)
    }

    pub(crate) fn emit(&mut self, op: Op, r: Register, n: i32, d: Operand) {
        self.code.push(Item::Instr(PseudoInstr { op, r, n, d }));
    }

    pub(crate) fn new_label(&mut self) -> LabelId {
        self.labels.next()
    }

    pub(crate) fn place_label(&mut self, id: LabelId) {
        self.code.push(Item::Label(id));
    }

    pub(crate) fn resolve_callable(&self, name: Symbol) -> Callable {
        *self
            .callables
            .lookup(name)
            .expect("a callable name unresolvable here was already rejected by the checker")
    }
}
