use triangle_syntax::ast::{Stmt, StmtKind};

use crate::error::CodegenError;
use crate::instr::{Op, Operand, Register};

use super::Generator;

impl<'i> Generator<'i> {
    pub(crate) fn gen_command(&mut self, stmt: Stmt<'_>) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::Block(&commands) => {
                for &command in commands.iter() {
                    self.gen_command(command)?;
                }
            }
            StmtKind::Let { decls: &decls, body: &body } => {
                let start = self.current_offset;
                self.variables.enter_scope();
                self.callables.enter_scope();
                self.allocate_declarations(decls)?;
                self.gen_command(body)?;
                self.callables.exit_scope();
                self.variables.exit_scope();
                let added = self.current_offset - start;
                if added > 0 {
                    self.emit(Op::Pop, Register::Cb, 0, Operand::Known(added));
                }
                self.current_offset = start;
            }
            StmtKind::If {
                cond: &cond,
                consequent: &consequent,
                alternative: &alternative,
            } => {
                self.gen_expr(cond)?;
                let alt_label = self.new_label();
                let end_label = self.new_label();
                self.emit(Op::Jumpif, Register::Cb, 0, Operand::Label(alt_label));
                if let Some(consequent) = consequent {
                    self.gen_command(consequent)?;
                }
                self.emit(Op::Jump, Register::Cb, 0, Operand::Label(end_label));
                self.place_label(alt_label);
                if let Some(alternative) = alternative {
                    self.gen_command(alternative)?;
                }
                self.place_label(end_label);
            }
            StmtKind::While { cond: &cond, body: &body } => {
                let loop_label = self.new_label();
                let skip_label = self.new_label();
                self.place_label(loop_label);
                self.gen_expr(cond)?;
                self.emit(Op::Jumpif, Register::Cb, 0, Operand::Label(skip_label));
                self.gen_command(body)?;
                self.emit(Op::Jump, Register::Cb, 0, Operand::Label(loop_label));
                self.place_label(skip_label);
            }
            StmtKind::LoopWhile {
                loop_body: &loop_body,
                cond: &cond,
                do_body: &do_body,
            } => {
                let loop_label = self.new_label();
                let skip_label = self.new_label();
                self.place_label(loop_label);
                self.gen_command(loop_body)?;
                self.gen_expr(cond)?;
                self.emit(Op::Jumpif, Register::Cb, 0, Operand::Label(skip_label));
                self.gen_command(do_body)?;
                self.emit(Op::Jump, Register::Cb, 0, Operand::Label(loop_label));
                self.place_label(skip_label);
            }
            StmtKind::RepeatWhile { body: &body, cond: &cond } => {
                let loop_label = self.new_label();
                self.place_label(loop_label);
                self.gen_command(body)?;
                self.gen_expr(cond)?;
                self.emit(Op::Jumpif, Register::Cb, 1, Operand::Label(loop_label));
            }
            StmtKind::RepeatUntil { body: &body, cond: &cond } => {
                let loop_label = self.new_label();
                self.place_label(loop_label);
                self.gen_command(body)?;
                self.gen_expr(cond)?;
                self.emit(Op::Jumpif, Register::Cb, 0, Operand::Label(loop_label));
            }
            StmtKind::Assign { target: &target, value: &value } => {
                self.gen_expr(value)?;
                let footprint = value
                    .resolved_type
                    .borrow()
                    .clone()
                    .expect("checked before codegen runs")
                    .footprint();
                self.store(target, footprint)?;
            }
            StmtKind::Expression(&expr) => {
                self.gen_expr(expr)?;
                let footprint = expr
                    .resolved_type
                    .borrow()
                    .clone()
                    .expect("checked before codegen runs")
                    .footprint();
                if footprint > 0 {
                    self.emit(Op::Pop, Register::Cb, 0, Operand::Known(footprint));
                }
            }
            StmtKind::Noop => {}
        }
        Ok(())
    }
}
