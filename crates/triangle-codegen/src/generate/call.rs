//! The call convention: argument evaluation order, the closure shape
//! passed for a callable argument, and dispatch on how the callee itself
//! is reached (a label, a primitive ordinal, or a parameter-held closure).

use triangle_base::Type;
use triangle_syntax::ast::{Argument, Expr, ExprKind, Identifier, IdentifierKind};

use crate::error::CodegenError;
use crate::instr::{Op, Operand, Register};

use super::{Callable, Generator};

impl<'i> Generator<'i> {
    pub(crate) fn generate_call(
        &mut self,
        name: triangle_base::Symbol,
        args: &[Argument<'_>],
    ) -> Result<(), CodegenError> {
        let text = self.interner.resolve(name).to_string();
        if text == "chr" || text == "ord" {
            // Both are identity conversions at this representation: a
            // `Char` and the `Int` that represents it share one word.
            return self.load_argument(&args[0]);
        }

        for arg in args {
            self.load_argument(arg)?;
        }

        match self.resolve_callable(name) {
            Callable::Static { label, level } => {
                let reg = Register::display(self.level - level);
                self.emit(Op::Call, reg, 0, Operand::Label(label));
            }
            Callable::Primitive(prim) => {
                self.emit(Op::CallPrim, Register::Pb, 0, Operand::Known(prim.ordinal()));
            }
            Callable::Dynamic { offset, level } => {
                let reg = Register::display(self.level - level);
                self.emit(Op::Load, reg, 1, Operand::Known(offset));
                self.emit(Op::Load, reg, 1, Operand::Known(offset + 1));
                self.emit(Op::CallI, Register::Cb, 0, Operand::Known(0));
            }
        }
        Ok(())
    }

    pub(crate) fn load_argument(&mut self, arg: &Argument<'_>) -> Result<(), CodegenError> {
        match arg {
            Argument::Expression(value) => {
                let value = *value;
                let ty = value
                    .resolved_type
                    .borrow()
                    .clone()
                    .expect("checked before codegen runs");
                if let Type::Func { .. } = ty {
                    self.load_closure_argument(value)
                } else {
                    self.gen_expr(value)
                }
            }
            Argument::VarArgument(ident) => {
                let ident = *ident;
                self.runtime_location(ident, true)
            }
        }
    }

    /// Pushes the two-word `{staticLink, codeAddr}` closure for a bare
    /// name that names a declared `proc`/`func`, a standard-environment
    /// primitive, or another routine's own `func`/`proc` parameter.
    fn load_closure_argument(&mut self, value: Expr<'_>) -> Result<(), CodegenError> {
        let ExprKind::Identifier(&ident) = &value.kind else {
            unreachable!("a callable-typed argument expression is always a bare identifier")
        };
        self.load_closure_for(ident)
    }

    fn load_closure_for(&mut self, ident: Identifier<'_>) -> Result<(), CodegenError> {
        let IdentifierKind::Basic(&name) = &ident.kind else {
            unreachable!("callable arguments are simple names, never field/subscript access")
        };
        match self.resolve_callable(name) {
            Callable::Static { label, level } => {
                let reg = Register::display(self.level - level);
                self.emit(Op::LoadA, reg, 0, Operand::Known(0));
                self.emit(Op::LoadA, Register::Cb, 0, Operand::Label(label));
            }
            Callable::Primitive(prim) => {
                self.emit(Op::LoadA, Register::Lb, 0, Operand::Known(0));
                self.emit(Op::LoadA, Register::Pb, 0, Operand::Known(prim.ordinal()));
            }
            Callable::Dynamic { offset, level } => {
                let reg = Register::display(self.level - level);
                self.emit(Op::LoadA, reg, 0, Operand::Known(offset));
                self.emit(Op::LoadI, Register::Cb, 1, Operand::Known(0));
                self.emit(Op::LoadA, reg, 0, Operand::Known(offset + 1));
                self.emit(Op::LoadI, Register::Cb, 1, Operand::Known(0));
            }
        }
        Ok(())
    }
}
