use triangle_base::Type;
use triangle_syntax::ast::{Expr, ExprKind};

use crate::error::CodegenError;
use crate::instr::{Op, Operand, Primitive, Register};

use super::Generator;

impl<'i> Generator<'i> {
    pub(crate) fn gen_expr(&mut self, expr: Expr<'_>) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::LitInt(&n) => {
                self.emit(Op::LoadL, Register::Cb, 0, Operand::Known(n as i32));
            }
            ExprKind::LitChar(&c) => {
                self.emit(Op::LoadL, Register::Cb, 0, Operand::Known(c as i32));
            }
            ExprKind::LitBool(&b) => {
                self.emit(Op::LoadL, Register::Cb, 0, Operand::Known(if b { 1 } else { 0 }));
            }
            ExprKind::LitArray(&elements) => {
                for &element in elements.iter() {
                    self.gen_expr(element)?;
                }
            }
            ExprKind::LitRecord(&fields) => {
                self.gen_record_literal(expr, fields)?;
            }
            ExprKind::Identifier(&ident) => {
                let size = ident
                    .resolved_type
                    .borrow()
                    .clone()
                    .expect("checked before codegen runs")
                    .footprint();
                self.fetch(ident, size)?;
            }
            ExprKind::UnaryOp { op: &op, operand: &operand } => {
                self.gen_expr(operand)?;
                let prim = self.primitive_for_unary_operator(op);
                self.emit(
                    Op::CallPrim,
                    Register::Pb,
                    0,
                    Operand::Known(prim.ordinal()),
                );
            }
            ExprKind::BinaryOp { op: &op, left: &left, right: &right } => {
                self.gen_expr(left)?;
                self.gen_expr(right)?;
                let text = self.interner.resolve(op).to_string();
                if text == "=" || text == "\\=" {
                    let footprint = left
                        .resolved_type
                        .borrow()
                        .clone()
                        .expect("checked before codegen runs")
                        .footprint();
                    self.emit(Op::LoadL, Register::Cb, 0, Operand::Known(footprint));
                }
                let prim = self.primitive_for_binary_operator(op);
                self.emit(
                    Op::CallPrim,
                    Register::Pb,
                    0,
                    Operand::Known(prim.ordinal()),
                );
            }
            ExprKind::FunCall { name: &name, args: &args } => {
                self.generate_call(name, args)?;
            }
            ExprKind::IfExpression {
                cond: &cond,
                then_branch: &then_branch,
                else_branch: &else_branch,
            } => {
                let alt_label = self.new_label();
                let end_label = self.new_label();
                self.gen_expr(cond)?;
                self.emit(Op::Jumpif, Register::Cb, 0, Operand::Label(alt_label));
                self.gen_expr(then_branch)?;
                self.emit(Op::Jump, Register::Cb, 0, Operand::Label(end_label));
                self.place_label(alt_label);
                self.gen_expr(else_branch)?;
                self.place_label(end_label);
            }
            ExprKind::LetExpression { decls: &decls, body: &body } => {
                let start = self.current_offset;
                self.variables.enter_scope();
                self.callables.enter_scope();
                self.allocate_declarations(decls)?;
                self.gen_expr(body)?;
                self.callables.exit_scope();
                self.variables.exit_scope();
                let added = self.current_offset - start;
                if added > 0 {
                    let result_size = body
                        .resolved_type
                        .borrow()
                        .clone()
                        .expect("checked before codegen runs")
                        .footprint();
                    self.emit(Op::Pop, Register::Cb, result_size, Operand::Known(added));
                }
                self.current_offset = start;
            }
            ExprKind::SequenceExpression { stmt: &stmt, expr: &inner } => {
                self.gen_command(stmt)?;
                self.gen_expr(inner)?;
            }
        }
        Ok(())
    }

    fn gen_record_literal(
        &mut self,
        expr: Expr<'_>,
        fields: &[(triangle_base::Symbol, Expr<'_>)],
    ) -> Result<(), CodegenError> {
        let ty = expr
            .resolved_type
            .borrow()
            .clone()
            .expect("checked before codegen runs");
        let Type::Record(canonical_fields) = ty else {
            unreachable!("a record literal is always typed as a record")
        };
        for (field_name, _) in &canonical_fields {
            let (_, value) = fields
                .iter()
                .find(|(sym, _)| self.interner.resolve(*sym) == field_name)
                .expect("every canonical field name has a matching literal field");
            self.gen_expr(value)?;
        }
        Ok(())
    }

    pub(crate) fn primitive_for_binary_operator(&self, op: triangle_base::Symbol) -> Primitive {
        match self.interner.resolve(op) {
            "+" => Primitive::Add,
            "-" => Primitive::Sub,
            "*" => Primitive::Mult,
            "/" => Primitive::Div,
            "\\" => Primitive::Mod,
            "<" => Primitive::Lt,
            "<=" => Primitive::Le,
            ">" => Primitive::Gt,
            ">=" => Primitive::Ge,
            "=" => Primitive::Eq,
            "\\=" => Primitive::Neq,
            "/\\" => Primitive::And,
            "\\/" => Primitive::Or,
            other => unreachable!("binary operator `{other}` has no primitive, the checker should have rejected it"),
        }
    }

    pub(crate) fn primitive_for_unary_operator(&self, op: triangle_base::Symbol) -> Primitive {
        match self.interner.resolve(op) {
            "-" => Primitive::Neg,
            "\\" => Primitive::Not,
            other => unreachable!("unary operator `{other}` has no primitive, the checker should have rejected it"),
        }
    }
}
