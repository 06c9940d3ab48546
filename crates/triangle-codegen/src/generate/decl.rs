use triangle_base::{Position, Type};
use triangle_syntax::ast::{Declaration, DeclKind, Parameter, ParameterKind};

use crate::error::CodegenError;
use crate::instr::{Op, Operand, Register};

use super::{Callable, Generator, VarEntry, CLOSURE_FOOTPRINT, LINK_DATA_SIZE};

impl<'i> Generator<'i> {
    pub(crate) fn allocate_declarations(
        &mut self,
        decls: &[Declaration<'_>],
    ) -> Result<(), CodegenError> {
        for &decl in decls.iter() {
            self.gen_declaration(decl)?;
        }
        Ok(())
    }

    fn gen_declaration(&mut self, decl: Declaration<'_>) -> Result<(), CodegenError> {
        match &decl.kind {
            DeclKind::Const { name: &name, value: &value } => {
                self.gen_expr(value)?;
                let footprint = value
                    .resolved_type
                    .borrow()
                    .clone()
                    .expect("checked before codegen runs")
                    .footprint();
                self.bind_local(name, footprint);
            }
            DeclKind::Var { name: &name, .. } => {
                let footprint = decl
                    .resolved_type
                    .borrow()
                    .clone()
                    .expect("checked before codegen runs")
                    .footprint();
                self.emit(Op::Push, Register::Cb, footprint, Operand::Known(0));
                self.bind_local(name, footprint);
            }
            DeclKind::Type { .. } => {
                // A type declaration has no runtime representation.
            }
            DeclKind::Proc { name: &name, params: &params, body: &body } => {
                let label = self.new_label();
                self.callables
                    .add(name, Callable::Static { label, level: self.level });
                let skip = self.new_label();
                self.emit(Op::Jump, Register::Cb, 0, Operand::Label(skip));
                self.place_label(label);
                let saved = self.enter_routine_scope(params, decl.position)?;
                self.gen_command(body)?;
                let params_footprint = self.params_footprint(params);
                self.emit(Op::Return, Register::Cb, 0, Operand::Known(params_footprint));
                self.exit_routine_scope(saved);
                self.place_label(skip);
            }
            DeclKind::Func {
                name: &name,
                params: &params,
                body: &body,
                ..
            } => {
                let label = self.new_label();
                self.callables
                    .add(name, Callable::Static { label, level: self.level });
                let skip = self.new_label();
                self.emit(Op::Jump, Register::Cb, 0, Operand::Label(skip));
                self.place_label(label);
                let saved = self.enter_routine_scope(params, decl.position)?;
                self.gen_expr(body)?;
                let result_footprint = body
                    .resolved_type
                    .borrow()
                    .clone()
                    .expect("checked before codegen runs")
                    .footprint();
                let params_footprint = self.params_footprint(params);
                self.emit(
                    Op::Return,
                    Register::Cb,
                    result_footprint,
                    Operand::Known(params_footprint),
                );
                self.exit_routine_scope(saved);
                self.place_label(skip);
            }
        }
        Ok(())
    }

    fn bind_local(&mut self, name: triangle_base::Symbol, footprint: i32) {
        let offset = self.current_offset;
        self.variables.add(name, VarEntry { offset, level: self.level });
        self.current_offset += footprint;
    }

    /// Enters a fresh routine scope: bumps the static nesting depth
    /// (erroring if that would exceed the six display registers beyond
    /// `Lb`), resets the local-declaration offset counter to just past the
    /// three-word link data, and binds every parameter at its
    /// reverse-order negative offset. Returns the state to restore once
    /// the body has been lowered.
    fn enter_routine_scope(
        &mut self,
        params: &[Parameter<'_>],
        position: Position,
    ) -> Result<(i32, usize), CodegenError> {
        if self.level + 1 > 6 {
            return Err(CodegenError::NestingTooDeep {
                position,
                depth: (self.level + 1) as u8,
            });
        }
        let saved_offset = self.current_offset;
        let saved_level = self.level;
        self.level += 1;
        self.variables.enter_scope();
        self.callables.enter_scope();
        self.current_offset = LINK_DATA_SIZE;
        self.bind_params(params);
        Ok((saved_offset, saved_level))
    }

    fn exit_routine_scope(&mut self, saved: (i32, usize)) {
        self.callables.exit_scope();
        self.variables.exit_scope();
        self.current_offset = saved.0;
        self.level = saved.1;
    }

    fn bind_params(&mut self, params: &[Parameter<'_>]) {
        let mut neg_offset = 0;
        for &param in params.iter().rev() {
            neg_offset -= self.parameter_footprint(param);
            let name = param.name();
            self.variables
                .add(name, VarEntry { offset: neg_offset, level: self.level });
            if let ParameterKind::Func { .. } = &param.kind {
                self.callables.add(
                    name,
                    Callable::Dynamic { offset: neg_offset, level: self.level },
                );
            }
        }
    }

    fn params_footprint(&self, params: &[Parameter<'_>]) -> i32 {
        params.iter().map(|&p| self.parameter_footprint(p)).sum()
    }

    pub(crate) fn parameter_footprint(&self, param: Parameter<'_>) -> i32 {
        let ty = param
            .resolved_type
            .borrow()
            .clone()
            .expect("checked before codegen runs");
        match ty {
            Type::Func { .. } => CLOSURE_FOOTPRINT,
            other => other.footprint(),
        }
    }
}
