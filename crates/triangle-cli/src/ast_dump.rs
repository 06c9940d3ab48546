//! A plain-text outline of a parsed AST, for `--dump-ast`.
//!
//! Not a pretty-printer that round-trips to source — just enough structure
//! (node kind, nesting, identifier text) to see what the parser produced
//! without reading the grammar.

use triangle_base::Interner;
use triangle_syntax::ast::{
    Argument, DeclKind, Declaration, Expr, ExprKind, Identifier, IdentifierKind, Stmt, StmtKind,
};

pub fn dump(program: Stmt<'_>, interner: &Interner) -> String {
    let mut out = String::new();
    dump_stmt(program, 0, interner, &mut out);
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    indent(out, depth);
    out.push_str(text);
    out.push('\n');
}

fn dump_stmt(stmt: Stmt<'_>, depth: usize, interner: &Interner, out: &mut String) {
    match &stmt.kind {
        StmtKind::Block(&commands) => {
            line(out, depth, "Block");
            for &c in commands.iter() {
                dump_stmt(c, depth + 1, interner, out);
            }
        }
        StmtKind::Let { decls: &decls, body: &body } => {
            line(out, depth, "Let");
            for &d in decls.iter() {
                dump_decl(d, depth + 1, interner, out);
            }
            dump_stmt(body, depth + 1, interner, out);
        }
        StmtKind::If { cond: &cond, consequent, alternative } => {
            line(out, depth, "If");
            dump_expr(cond, depth + 1, interner, out);
            if let Some(&c) = consequent.as_ref() {
                dump_stmt(c, depth + 1, interner, out);
            }
            if let Some(&a) = alternative.as_ref() {
                dump_stmt(a, depth + 1, interner, out);
            }
        }
        StmtKind::While { cond: &cond, body: &body } => {
            line(out, depth, "While");
            dump_expr(cond, depth + 1, interner, out);
            dump_stmt(body, depth + 1, interner, out);
        }
        StmtKind::LoopWhile { loop_body: &loop_body, cond: &cond, do_body: &do_body } => {
            line(out, depth, "LoopWhile");
            dump_stmt(loop_body, depth + 1, interner, out);
            dump_expr(cond, depth + 1, interner, out);
            dump_stmt(do_body, depth + 1, interner, out);
        }
        StmtKind::RepeatWhile { body: &body, cond: &cond } => {
            line(out, depth, "RepeatWhile");
            dump_stmt(body, depth + 1, interner, out);
            dump_expr(cond, depth + 1, interner, out);
        }
        StmtKind::RepeatUntil { body: &body, cond: &cond } => {
            line(out, depth, "RepeatUntil");
            dump_stmt(body, depth + 1, interner, out);
            dump_expr(cond, depth + 1, interner, out);
        }
        StmtKind::Assign { target: &target, value: &value } => {
            line(out, depth, "Assign");
            dump_ident(target, depth + 1, interner, out);
            dump_expr(value, depth + 1, interner, out);
        }
        StmtKind::Expression(&expr) => {
            line(out, depth, "Expression");
            dump_expr(expr, depth + 1, interner, out);
        }
        StmtKind::Noop => line(out, depth, "Noop"),
    }
}

fn dump_decl(decl: Declaration<'_>, depth: usize, interner: &Interner, out: &mut String) {
    match &decl.kind {
        DeclKind::Const { name: &name, value: &value } => {
            line(out, depth, &format!("Const {}", interner.resolve(name)));
            dump_expr(value, depth + 1, interner, out);
        }
        DeclKind::Var { name: &name, .. } => {
            line(out, depth, &format!("Var {}", interner.resolve(name)));
        }
        DeclKind::Type { name: &name, .. } => {
            line(out, depth, &format!("Type {}", interner.resolve(name)));
        }
        DeclKind::Proc { name: &name, params: &params, body: &body } => {
            line(out, depth, &format!("Proc {} ({} param(s))", interner.resolve(name), params.len()));
            dump_stmt(body, depth + 1, interner, out);
        }
        DeclKind::Func { name: &name, params: &params, body: &body, .. } => {
            line(out, depth, &format!("Func {} ({} param(s))", interner.resolve(name), params.len()));
            dump_expr(body, depth + 1, interner, out);
        }
    }
}

fn dump_expr(expr: Expr<'_>, depth: usize, interner: &Interner, out: &mut String) {
    match &expr.kind {
        ExprKind::LitInt(&n) => line(out, depth, &format!("LitInt({n})")),
        ExprKind::LitChar(&c) => line(out, depth, &format!("LitChar({c:?})")),
        ExprKind::LitBool(&b) => line(out, depth, &format!("LitBool({b})")),
        ExprKind::LitArray(&elements) => {
            line(out, depth, "LitArray");
            for &e in elements.iter() {
                dump_expr(e, depth + 1, interner, out);
            }
        }
        ExprKind::LitRecord(&fields) => {
            line(out, depth, "LitRecord");
            for &(name, value) in fields.iter() {
                indent(out, depth + 1);
                out.push_str(interner.resolve(name));
                out.push_str(" =\n");
                dump_expr(value, depth + 2, interner, out);
            }
        }
        ExprKind::Identifier(&ident) => {
            line(out, depth, "Identifier");
            dump_ident(ident, depth + 1, interner, out);
        }
        ExprKind::UnaryOp { op: &op, operand: &operand } => {
            line(out, depth, &format!("UnaryOp {}", interner.resolve(op)));
            dump_expr(operand, depth + 1, interner, out);
        }
        ExprKind::BinaryOp { op: &op, left: &left, right: &right } => {
            line(out, depth, &format!("BinaryOp {}", interner.resolve(op)));
            dump_expr(left, depth + 1, interner, out);
            dump_expr(right, depth + 1, interner, out);
        }
        ExprKind::FunCall { name: &name, args: &args } => {
            line(out, depth, &format!("FunCall {}", interner.resolve(name)));
            for arg in args.iter() {
                match arg {
                    Argument::Expression(&value) => dump_expr(value, depth + 1, interner, out),
                    Argument::VarArgument(&ident) => dump_ident(ident, depth + 1, interner, out),
                }
            }
        }
        ExprKind::IfExpression { cond: &cond, then_branch: &then_branch, else_branch: &else_branch } => {
            line(out, depth, "IfExpression");
            dump_expr(cond, depth + 1, interner, out);
            dump_expr(then_branch, depth + 1, interner, out);
            dump_expr(else_branch, depth + 1, interner, out);
        }
        ExprKind::LetExpression { decls: &decls, body: &body } => {
            line(out, depth, "LetExpression");
            for &d in decls.iter() {
                dump_decl(d, depth + 1, interner, out);
            }
            dump_expr(body, depth + 1, interner, out);
        }
        ExprKind::SequenceExpression { stmt: &stmt, expr: &inner } => {
            line(out, depth, "SequenceExpression");
            dump_stmt(stmt, depth + 1, interner, out);
            dump_expr(inner, depth + 1, interner, out);
        }
    }
}

fn dump_ident(ident: Identifier<'_>, depth: usize, interner: &Interner, out: &mut String) {
    match &ident.kind {
        IdentifierKind::Basic(&name) => {
            line(out, depth, &format!("Identifier {}", interner.resolve(name)));
        }
        IdentifierKind::RecordAccess { record: &record, field: &field } => {
            line(out, depth, &format!("RecordAccess .{}", interner.resolve(field)));
            dump_ident(record, depth + 1, interner, out);
        }
        IdentifierKind::ArraySubscript { array: &array, subscript: &subscript } => {
            line(out, depth, "ArraySubscript");
            dump_ident(array, depth + 1, interner, out);
            dump_expr(subscript, depth + 1, interner, out);
        }
    }
}
