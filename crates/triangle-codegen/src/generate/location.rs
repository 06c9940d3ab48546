//! Runtime address computation, fetch and store for identifiers.
//!
//! A plain non-reference simple name is addressed directly in one
//! instruction (`LOAD`/`STORE size, offset[reg]`). Anything else — a
//! `var`-parameter alias, an array subscript, a record field — needs an
//! address computed on the stack first, then read or written indirectly
//! (`LOADI`/`STOREI`).

use triangle_syntax::ast::{Identifier, IdentifierKind};

use crate::error::CodegenError;
use crate::instr::{Op, Operand, Primitive, Register};

use super::Generator;

const ADDRESS_SIZE: i32 = 1;

impl<'i> Generator<'i> {
    /// Pushes the address of `ident`'s underlying value. `dereferencing`
    /// controls whether a reference-typed `Basic` identifier is followed
    /// one level, landing on the address it ultimately refers to rather
    /// than the address of the reference word itself.
    pub(crate) fn runtime_location(
        &mut self,
        ident: Identifier<'_>,
        dereferencing: bool,
    ) -> Result<(), CodegenError> {
        match &ident.kind {
            IdentifierKind::Basic(&name) => {
                let entry = *self
                    .variables
                    .lookup(name)
                    .expect("undeclared names are rejected before codegen runs");
                let reg = Register::display(self.level - entry.level);
                self.emit(Op::LoadA, reg, 0, Operand::Known(entry.offset));
                let is_ref = ident
                    .resolved_type
                    .borrow()
                    .as_ref()
                    .expect("checked before codegen runs")
                    .is_ref();
                if dereferencing && is_ref {
                    self.emit(Op::LoadI, Register::Cb, ADDRESS_SIZE, Operand::Known(0));
                }
            }
            IdentifierKind::ArraySubscript {
                array: &array,
                subscript: &subscript,
            } => {
                self.runtime_location(array, true)?;
                self.gen_expr(subscript)?;
                let array_ty = array
                    .resolved_type
                    .borrow()
                    .as_ref()
                    .expect("checked before codegen runs")
                    .base_type()
                    .clone();
                let element_footprint = match array_ty {
                    triangle_base::Type::Array { element, .. } => element.footprint(),
                    _ => unreachable!("array-subscript base is an array"),
                };
                self.emit(Op::LoadL, Register::Cb, 0, Operand::Known(element_footprint));
                self.emit(
                    Op::CallPrim,
                    Register::Pb,
                    0,
                    Operand::Known(Primitive::Mult.ordinal()),
                );
                self.emit(
                    Op::CallPrim,
                    Register::Pb,
                    0,
                    Operand::Known(Primitive::Add.ordinal()),
                );
            }
            IdentifierKind::RecordAccess {
                record: &record,
                field: &field,
            } => {
                self.runtime_location(record, true)?;
                let ty = record
                    .resolved_type
                    .borrow()
                    .as_ref()
                    .expect("checked before codegen runs")
                    .base_type()
                    .clone();
                let field_name = self.interner.resolve(field).to_string();
                let fields = ty.record_fields().expect("record-access base is a record");
                let field_offset: i32 = fields
                    .iter()
                    .take_while(|(name, _)| name != &field_name)
                    .map(|(_, ty)| ty.footprint())
                    .sum();
                if field_offset != 0 {
                    self.emit(Op::LoadL, Register::Cb, 0, Operand::Known(field_offset));
                    self.emit(
                        Op::CallPrim,
                        Register::Pb,
                        0,
                        Operand::Known(Primitive::Add.ordinal()),
                    );
                }
            }
        }
        Ok(())
    }

    pub(crate) fn fetch(&mut self, ident: Identifier<'_>, size: i32) -> Result<(), CodegenError> {
        if let Some((reg, offset)) = self.direct_location(ident) {
            self.emit(Op::Load, reg, size, Operand::Known(offset));
            return Ok(());
        }
        self.runtime_location(ident, true)?;
        self.emit(Op::LoadI, Register::Cb, size, Operand::Known(0));
        Ok(())
    }

    pub(crate) fn store(&mut self, ident: Identifier<'_>, size: i32) -> Result<(), CodegenError> {
        if let Some((reg, offset)) = self.direct_location(ident) {
            self.emit(Op::Store, reg, size, Operand::Known(offset));
            return Ok(());
        }
        self.runtime_location(ident, true)?;
        self.emit(Op::StoreI, Register::Cb, size, Operand::Known(0));
        Ok(())
    }

    /// `Some((register, offset))` exactly when `ident` is a non-reference
    /// simple name: the one case that skips `runtime_location` entirely
    /// and addresses the slot directly.
    fn direct_location(&self, ident: Identifier<'_>) -> Option<(Register, i32)> {
        let IdentifierKind::Basic(&name) = &ident.kind else {
            return None;
        };
        let is_ref = ident
            .resolved_type
            .borrow()
            .as_ref()
            .expect("checked before codegen runs")
            .is_ref();
        if is_ref {
            return None;
        }
        let entry = *self.variables.lookup(name)?;
        Some((Register::display(self.level - entry.level), entry.offset))
    }
}
