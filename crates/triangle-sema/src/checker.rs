//! The semantic analyzer (C4): a single-pass walk over the AST that
//! resolves names against the scoped symbol tables, canonicalizes record
//! types, and annotates every typeable node's resolved-type slot in place.
//!
//! Errors are accumulated rather than fatal. A command's children are
//! always all visited even after one of them fails, so one mistake in a
//! `let`-block doesn't hide the others — recovery happens at each
//! statement boundary, not just once for the whole program.

use std::collections::HashSet;

use triangle_base::{Interner, Position, Symbol, Type};
use triangle_syntax::ast::{
    Argument, DeclKind, Declaration, Expr, ExprKind, Identifier, IdentifierKind, Parameter,
    ParameterKind, Stmt, StmtKind, TypeSig,
};

use crate::binding::{Binding, TermKind};
use crate::error::SemanticError;
use crate::stdenv;
use crate::symbol_table::SymbolTable;

pub struct Checker<'i> {
    interner: &'i mut Interner,
    types: SymbolTable<Type>,
    binary_ops: SymbolTable<Type>,
    unary_ops: SymbolTable<Type>,
    terms: SymbolTable<Binding>,
    errors: Vec<SemanticError>,
}

impl<'i> Checker<'i> {
    pub fn new(interner: &'i mut Interner) -> Self {
        let mut types = SymbolTable::new();
        let mut binary_ops = SymbolTable::new();
        let mut unary_ops = SymbolTable::new();
        let mut terms = SymbolTable::new();
        stdenv::populate_types(&mut types, interner);
        stdenv::populate_binary_operators(&mut binary_ops, interner);
        stdenv::populate_unary_operators(&mut unary_ops, interner);
        stdenv::populate_terms(&mut terms, interner);
        Self {
            interner,
            types,
            binary_ops,
            unary_ops,
            terms,
            errors: Vec::new(),
        }
    }

    /// Checks an entire program and returns every error found. Whatever
    /// could be resolved was annotated on the AST regardless — callers
    /// should not assume a non-empty result means the tree is unusable.
    pub fn check_program(mut self, program: Stmt<'_>) -> Vec<SemanticError> {
        self.check_command(program);
        self.errors
    }

    fn error(&mut self, error: SemanticError) {
        self.errors.push(error);
    }

    // -- statements -------------------------------------------------------

    fn check_command(&mut self, stmt: Stmt<'_>) {
        match &stmt.kind {
            StmtKind::Block(&commands) => {
                for &command in commands.iter() {
                    self.check_command(command);
                }
            }
            StmtKind::Let {
                decls: &decls,
                body: &body,
            } => {
                self.terms.enter_scope();
                self.types.enter_scope();
                for &decl in decls.iter() {
                    self.check_declaration(decl);
                }
                self.check_command(body);
                self.types.exit_scope();
                self.terms.exit_scope();
            }
            StmtKind::If {
                cond: &cond,
                consequent: &consequent,
                alternative: &alternative,
            } => {
                self.check_condition(cond);
                if let Some(consequent) = consequent {
                    self.check_command(consequent);
                }
                if let Some(alternative) = alternative {
                    self.check_command(alternative);
                }
            }
            StmtKind::While {
                cond: &cond,
                body: &body,
            } => {
                self.check_condition(cond);
                self.check_command(body);
            }
            StmtKind::LoopWhile {
                loop_body: &loop_body,
                cond: &cond,
                do_body: &do_body,
            } => {
                self.check_command(loop_body);
                self.check_condition(cond);
                self.check_command(do_body);
            }
            StmtKind::RepeatWhile {
                body: &body,
                cond: &cond,
            }
            | StmtKind::RepeatUntil {
                body: &body,
                cond: &cond,
            } => {
                self.check_command(body);
                self.check_condition(cond);
            }
            StmtKind::Assign {
                target: &target,
                value: &value,
            } => {
                let target_ty = self.check_identifier(target);
                let value_ty = self.check_expr(value);
                let root = target.root();
                let assignable = self
                    .terms
                    .lookup(root)
                    .map(|b| b.kind.is_assignable())
                    .unwrap_or(false);
                if !assignable {
                    self.error(SemanticError::NotAssignable {
                        name: root,
                        position: target.position,
                    });
                }
                if target_ty != value_ty {
                    self.error(SemanticError::TypeMismatch {
                        expected: format!("{target_ty:?}"),
                        found: format!("{value_ty:?}"),
                        position: value.position,
                    });
                }
            }
            StmtKind::Expression(&expr) => {
                self.check_expr(expr);
            }
            StmtKind::Noop => {}
        }
    }

    fn check_condition(&mut self, cond: Expr<'_>) {
        let ty = self.check_expr(cond);
        if ty != Type::Bool {
            self.error(SemanticError::TypeMismatch {
                expected: "Boolean".to_string(),
                found: format!("{ty:?}"),
                position: cond.position,
            });
        }
    }

    // -- declarations -------------------------------------------------------

    fn check_declaration(&mut self, decl: Declaration<'_>) {
        match &decl.kind {
            DeclKind::Const {
                name: &name,
                value: &value,
            } => {
                let ty = self.check_expr(value);
                self.declare_term(name, Binding::new(TermKind::Const, ty.clone()), decl.position);
                *decl.resolved_type.borrow_mut() = Some(ty);
            }
            DeclKind::Var {
                name: &name,
                type_sig: &type_sig,
            } => {
                let ty = self.resolve_type_sig(&type_sig, decl.position);
                self.declare_term(name, Binding::new(TermKind::Var, ty.clone()), decl.position);
                *decl.resolved_type.borrow_mut() = Some(ty);
            }
            DeclKind::Type {
                name: &name,
                type_sig: &type_sig,
            } => {
                let ty = self.resolve_type_sig(&type_sig, decl.position);
                self.declare_type(name, ty.clone(), decl.position);
                *decl.resolved_type.borrow_mut() = Some(ty);
            }
            DeclKind::Proc {
                name: &name,
                params: &params,
                body: &body,
            } => {
                let param_types = self.resolve_params(params);
                let func_ty = Type::Func {
                    params: param_types,
                    result: Box::new(Type::Void),
                };
                self.declare_term(name, Binding::new(TermKind::Proc, func_ty.clone()), decl.position);
                *decl.resolved_type.borrow_mut() = Some(func_ty);

                self.terms.enter_scope();
                self.types.enter_scope();
                self.bind_params(params);
                self.check_command(body);
                self.types.exit_scope();
                self.terms.exit_scope();
            }
            DeclKind::Func {
                name: &name,
                params: &params,
                return_type_sig: &return_type_sig,
                body: &body,
            } => {
                let param_types = self.resolve_params(params);
                let return_ty = self.resolve_type_sig(&return_type_sig, decl.position);
                let func_ty = Type::Func {
                    params: param_types,
                    result: Box::new(return_ty.clone()),
                };
                self.declare_term(name, Binding::new(TermKind::Func, func_ty.clone()), decl.position);
                *decl.resolved_type.borrow_mut() = Some(func_ty);

                self.terms.enter_scope();
                self.types.enter_scope();
                self.bind_params(params);
                let body_ty = self.check_expr(body);
                if body_ty != return_ty {
                    self.error(SemanticError::TypeMismatch {
                        expected: format!("{return_ty:?}"),
                        found: format!("{body_ty:?}"),
                        position: body.position,
                    });
                }
                self.types.exit_scope();
                self.terms.exit_scope();
            }
        }
    }

    fn declare_term(&mut self, name: Symbol, binding: Binding, position: Position) {
        if self.terms.is_bound_locally(name) {
            self.error(SemanticError::DuplicateDeclaration { name, position });
        }
        self.terms.add(name, binding);
    }

    fn declare_type(&mut self, name: Symbol, ty: Type, position: Position) {
        if self.types.is_bound_locally(name) {
            self.error(SemanticError::DuplicateDeclaration { name, position });
        }
        self.types.add(name, ty);
    }

    fn resolve_params(&mut self, params: &[Parameter<'_>]) -> Vec<Type> {
        params
            .iter()
            .map(|&param| {
                let ty = self.resolve_parameter(param);
                *param.resolved_type.borrow_mut() = Some(ty.clone());
                ty
            })
            .collect()
    }

    fn resolve_parameter(&mut self, param: Parameter<'_>) -> Type {
        match &param.kind {
            ParameterKind::Value { type_sig: &type_sig, .. } => {
                self.resolve_type_sig(&type_sig, param.position)
            }
            ParameterKind::Var { type_sig: &type_sig, .. } => {
                Type::RefOf(Box::new(self.resolve_type_sig(&type_sig, param.position)))
            }
            ParameterKind::Func {
                params: &params,
                return_type_sig: &return_type_sig,
                ..
            } => {
                let param_types = self.resolve_params(params);
                let return_ty = match return_type_sig {
                    Some(sig) => self.resolve_type_sig(&sig, param.position),
                    None => Type::Void,
                };
                Type::Func {
                    params: param_types,
                    result: Box::new(return_ty),
                }
            }
        }
    }

    fn bind_params(&mut self, params: &[Parameter<'_>]) {
        for &param in params.iter() {
            let ty = param
                .resolved_type
                .borrow()
                .clone()
                .expect("resolve_params runs before bind_params");
            let kind = match &param.kind {
                ParameterKind::Value { .. } => TermKind::ValueParam,
                ParameterKind::Var { .. } => TermKind::VarParam,
                ParameterKind::Func { .. } => TermKind::FuncParam,
            };
            self.declare_term(param.name(), Binding::new(kind, ty), param.position);
        }
    }

    fn resolve_type_sig(&mut self, sig: &TypeSig<'_>, position: Position) -> Type {
        match *sig {
            TypeSig::Named(name, name_position) => match self.types.lookup(name) {
                Some(ty) => ty.clone(),
                None => {
                    self.error(SemanticError::Undeclared {
                        name,
                        position: name_position,
                    });
                    Type::Void
                }
            },
            TypeSig::Array { size, element } => Type::Array {
                size,
                element: Box::new(self.resolve_type_sig(element, position)),
            },
            TypeSig::Record(fields) => {
                let mut seen = HashSet::new();
                let mut resolved = Vec::with_capacity(fields.len());
                for &(name, field_sig) in fields.iter() {
                    if !seen.insert(name) {
                        self.error(SemanticError::DuplicateField {
                            field: name,
                            position,
                        });
                    }
                    let field_ty = self.resolve_type_sig(&field_sig, position);
                    resolved.push((self.interner.resolve(name).to_string(), field_ty));
                }
                Type::record(resolved)
            }
            TypeSig::Void => Type::Void,
        }
    }

    // -- identifiers (runtime locations) -----------------------------------

    fn check_identifier(&mut self, ident: Identifier<'_>) -> Type {
        let ty = match &ident.kind {
            IdentifierKind::Basic(&name) => match self.terms.lookup(name) {
                Some(binding) => binding.ty.clone(),
                None => {
                    self.error(SemanticError::Undeclared {
                        name,
                        position: ident.position,
                    });
                    Type::Void
                }
            },
            IdentifierKind::RecordAccess {
                record: &record,
                field: &field,
            } => {
                let record_ty = self.check_identifier(record);
                match record_ty.base_type().record_fields() {
                    Some(fields) => {
                        let field_name = self.interner.resolve(field).to_string();
                        match fields.iter().find(|(name, _)| *name == field_name) {
                            Some((_, field_ty)) => field_ty.clone(),
                            None => {
                                self.error(SemanticError::NoSuchField {
                                    field,
                                    position: ident.position,
                                });
                                Type::Void
                            }
                        }
                    }
                    None => {
                        self.error(SemanticError::NotARecord {
                            position: ident.position,
                        });
                        Type::Void
                    }
                }
            }
            IdentifierKind::ArraySubscript {
                array: &array,
                subscript: &subscript,
            } => {
                let array_ty = self.check_identifier(array);
                let subscript_ty = self.check_expr(subscript);
                if subscript_ty != Type::Int {
                    self.error(SemanticError::TypeMismatch {
                        expected: "Integer".to_string(),
                        found: format!("{subscript_ty:?}"),
                        position: subscript.position,
                    });
                }
                match array_ty.base_type() {
                    Type::Array { element, .. } => (**element).clone(),
                    _ => {
                        self.error(SemanticError::NotAnArray {
                            position: ident.position,
                        });
                        Type::Void
                    }
                }
            }
        };
        *ident.resolved_type.borrow_mut() = Some(ty.clone());
        ty
    }

    // -- expressions ----------------------------------------------------------

    fn check_expr(&mut self, expr: Expr<'_>) -> Type {
        let ty = match &expr.kind {
            ExprKind::LitInt(_) => Type::Int,
            ExprKind::LitChar(_) => Type::Char,
            ExprKind::LitBool(_) => Type::Bool,
            ExprKind::LitArray(&elements) => self.check_array_literal(elements, expr.position),
            ExprKind::LitRecord(&fields) => self.check_record_literal(fields),
            ExprKind::Identifier(&ident) => self.check_identifier(ident),
            ExprKind::UnaryOp {
                op: &op,
                operand: &operand,
            } => {
                let operand_ty = self.check_expr(operand);
                self.check_unary_op(op, operand_ty, expr.position)
            }
            ExprKind::BinaryOp {
                op: &op,
                left: &left,
                right: &right,
            } => {
                let left_ty = self.check_expr(left);
                let right_ty = self.check_expr(right);
                self.check_binary_op(op, left_ty, right_ty, expr.position)
            }
            ExprKind::FunCall {
                name: &name,
                args: &args,
            } => self.check_call(name, args, expr.position),
            ExprKind::IfExpression {
                cond: &cond,
                then_branch: &then_branch,
                else_branch: &else_branch,
            } => {
                self.check_condition(cond);
                let then_ty = self.check_expr(then_branch);
                let else_ty = self.check_expr(else_branch);
                if then_ty != else_ty {
                    self.error(SemanticError::TypeMismatch {
                        expected: format!("{then_ty:?}"),
                        found: format!("{else_ty:?}"),
                        position: else_branch.position,
                    });
                }
                then_ty
            }
            ExprKind::LetExpression {
                decls: &decls,
                body: &body,
            } => {
                self.terms.enter_scope();
                self.types.enter_scope();
                for &decl in decls.iter() {
                    self.check_declaration(decl);
                }
                let ty = self.check_expr(body);
                self.types.exit_scope();
                self.terms.exit_scope();
                ty
            }
            ExprKind::SequenceExpression {
                stmt: &stmt,
                expr: &inner,
            } => {
                self.check_command(stmt);
                self.check_expr(inner)
            }
        };
        *expr.resolved_type.borrow_mut() = Some(ty.clone());
        ty
    }

    fn check_array_literal(&mut self, elements: &[Expr<'_>], position: Position) -> Type {
        if elements.is_empty() {
            self.error(SemanticError::TypeMismatch {
                expected: "at least one element".to_string(),
                found: "an empty array literal".to_string(),
                position,
            });
            return Type::Void;
        }
        let element_ty = self.check_expr(elements[0]);
        for &element in elements[1..].iter() {
            let ty = self.check_expr(element);
            if ty != element_ty {
                self.error(SemanticError::TypeMismatch {
                    expected: format!("{element_ty:?}"),
                    found: format!("{ty:?}"),
                    position: element.position,
                });
            }
        }
        Type::Array {
            size: elements.len() as u32,
            element: Box::new(element_ty),
        }
    }

    fn check_record_literal(&mut self, fields: &[(Symbol, Expr<'_>)]) -> Type {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(fields.len());
        for &(name, value) in fields.iter() {
            if !seen.insert(name) {
                self.error(SemanticError::DuplicateField {
                    field: name,
                    position: value.position,
                });
            }
            let ty = self.check_expr(value);
            resolved.push((self.interner.resolve(name).to_string(), ty));
        }
        Type::record(resolved)
    }

    fn check_unary_op(&mut self, op: Symbol, operand_ty: Type, position: Position) -> Type {
        match self.unary_ops.lookup(op).cloned() {
            Some(Type::Func { params, result }) => {
                if params.first() != Some(&operand_ty) {
                    self.error(SemanticError::TypeMismatch {
                        expected: params.first().map(|t| format!("{t:?}")).unwrap_or_default(),
                        found: format!("{operand_ty:?}"),
                        position,
                    });
                }
                *result
            }
            _ => {
                self.error(SemanticError::Undeclared { name: op, position });
                Type::Void
            }
        }
    }

    /// Checks a binary operator application.
    ///
    /// The right operand is checked against the operator's *first*
    /// declared parameter type, not its second — that is how the
    /// reference compiler's rule reads, and it is carried over here
    /// rather than corrected, so `a + b` is accepted or rejected exactly
    /// as the original would.
    fn check_binary_op(&mut self, op: Symbol, left_ty: Type, right_ty: Type, position: Position) -> Type {
        match self.binary_ops.lookup(op).cloned() {
            Some(Type::Func { params, result }) => {
                let first_param = params.first().cloned();
                if first_param.as_ref() != Some(&left_ty) {
                    self.error(SemanticError::TypeMismatch {
                        expected: first_param.as_ref().map(|t| format!("{t:?}")).unwrap_or_default(),
                        found: format!("{left_ty:?}"),
                        position,
                    });
                }
                if first_param.as_ref() != Some(&right_ty) {
                    self.error(SemanticError::TypeMismatch {
                        expected: first_param.map(|t| format!("{t:?}")).unwrap_or_default(),
                        found: format!("{right_ty:?}"),
                        position,
                    });
                }
                *result
            }
            _ => {
                self.error(SemanticError::Undeclared { name: op, position });
                Type::Void
            }
        }
    }

    fn check_call(&mut self, name: Symbol, args: &[Argument<'_>], position: Position) -> Type {
        let binding = match self.terms.lookup(name) {
            Some(binding) if binding.kind.is_callable() => binding.clone(),
            Some(_) => {
                self.error(SemanticError::NotCallable { name, position });
                return Type::Void;
            }
            None => {
                self.error(SemanticError::Undeclared { name, position });
                return Type::Void;
            }
        };
        let Type::Func { params, result } = binding.ty else {
            self.error(SemanticError::NotCallable { name, position });
            return Type::Void;
        };
        if params.len() != args.len() {
            self.error(SemanticError::ArgumentCountMismatch {
                name,
                expected: params.len(),
                found: args.len(),
                position,
            });
        }
        for (i, arg) in args.iter().enumerate() {
            let expected = params.get(i);
            match arg {
                Argument::Expression(value) => {
                    let value = *value;
                    let arg_ty = self.check_expr(value);
                    if let Some(expected_ty) = expected {
                        if expected_ty.is_ref() {
                            self.error(SemanticError::ArgumentKindMismatch {
                                name,
                                position: value.position,
                                message: "this parameter takes a var argument".to_string(),
                            });
                        } else if &arg_ty != expected_ty {
                            self.error(SemanticError::TypeMismatch {
                                expected: format!("{expected_ty:?}"),
                                found: format!("{arg_ty:?}"),
                                position: value.position,
                            });
                        }
                    }
                }
                Argument::VarArgument(ident) => {
                    let ident = *ident;
                    let ident_ty = self.check_identifier(ident);
                    let root = ident.root();
                    let assignable = self
                        .terms
                        .lookup(root)
                        .map(|b| b.kind.accepts_var_argument())
                        .unwrap_or(false);
                    if !assignable {
                        self.error(SemanticError::ArgumentKindMismatch {
                            name,
                            position: ident.position,
                            message: "var argument must name a variable or var parameter"
                                .to_string(),
                        });
                    }
                    if let Some(expected_ty) = expected {
                        let inner = expected_ty.base_type();
                        if &ident_ty != inner {
                            self.error(SemanticError::TypeMismatch {
                                expected: format!("{inner:?}"),
                                found: format!("{ident_ty:?}"),
                                position: ident.position,
                            });
                        }
                    }
                }
            }
        }
        *result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangle_syntax::ast::{Ast, DeclNode, ExprNode, IdentifierNode, StmtNode};

    fn ident<'a>(ast: &'a Ast<'a>, interner: &mut Interner, name: &str) -> Identifier<'a> {
        let sym = interner.intern(name);
        ast.idents
            .alloc(IdentifierNode::new(IdentifierKind::Basic(sym), Position::new(1, 1)))
    }

    fn lit_int<'a>(ast: &'a Ast<'a>, value: i64) -> Expr<'a> {
        ast.exprs.alloc(ExprNode::new(ExprKind::LitInt(value), Position::new(1, 1)))
    }

    #[test]
    fn undeclared_identifier_is_reported_and_typed_void() {
        let mut interner = Interner::new();
        let ast = Ast::new();
        let x = ident(&ast, &mut interner, "x");
        let inner = ast
            .exprs
            .alloc(ExprNode::new(ExprKind::Identifier(x), Position::new(1, 1)));
        let stmt = ast
            .stmts
            .alloc(StmtNode::new(StmtKind::Expression(inner), Position::new(1, 1)));
        let errors = Checker::new(&mut interner).check_program(stmt);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], SemanticError::Undeclared { .. }));
        assert_eq!(*x.resolved_type.borrow(), Some(Type::Void));
    }

    #[test]
    fn const_declaration_is_visible_in_its_let_body() {
        let mut interner = Interner::new();
        let ast = Ast::new();
        let name = interner.intern("x");
        let value = lit_int(&ast, 5);
        let decl = ast
            .decls
            .alloc(DeclNode::new(DeclKind::Const { name, value }, Position::new(1, 1)));
        let decls: &[Declaration] = ast.decls_list.alloc_slice(vec![decl]);
        let body_ident = ident(&ast, &mut interner, "x");
        let body_expr = ast.exprs.alloc(ExprNode::new(
            ExprKind::Identifier(body_ident),
            Position::new(1, 1),
        ));
        let body = ast
            .stmts
            .alloc(StmtNode::new(StmtKind::Expression(body_expr), Position::new(1, 1)));
        let let_stmt = ast
            .stmts
            .alloc(StmtNode::new(StmtKind::Let { decls, body }, Position::new(1, 1)));
        let errors = Checker::new(&mut interner).check_program(let_stmt);
        assert!(errors.is_empty());
        assert_eq!(*body_ident.resolved_type.borrow(), Some(Type::Int));
    }

    #[test]
    fn duplicate_declaration_in_same_scope_is_reported() {
        let mut interner = Interner::new();
        let ast = Ast::new();
        let name = interner.intern("x");
        let decl_a = ast.decls.alloc(DeclNode::new(
            DeclKind::Const {
                name,
                value: lit_int(&ast, 1),
            },
            Position::new(1, 1),
        ));
        let decl_b = ast.decls.alloc(DeclNode::new(
            DeclKind::Const {
                name,
                value: lit_int(&ast, 2),
            },
            Position::new(2, 1),
        ));
        let decls: &[Declaration] = ast.decls_list.alloc_slice(vec![decl_a, decl_b]);
        let body = ast.stmts.alloc(StmtNode::new(StmtKind::Noop, Position::new(3, 1)));
        let let_stmt = ast
            .stmts
            .alloc(StmtNode::new(StmtKind::Let { decls, body }, Position::new(1, 1)));
        let errors = Checker::new(&mut interner).check_program(let_stmt);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], SemanticError::DuplicateDeclaration { .. }));
    }

    #[test]
    fn assigning_to_a_constant_is_not_assignable() {
        let mut interner = Interner::new();
        let ast = Ast::new();
        let name = interner.intern("x");
        let decl = ast.decls.alloc(DeclNode::new(
            DeclKind::Const {
                name,
                value: lit_int(&ast, 1),
            },
            Position::new(1, 1),
        ));
        let decls: &[Declaration] = ast.decls_list.alloc_slice(vec![decl]);
        let target = ident(&ast, &mut interner, "x");
        let body = ast.stmts.alloc(StmtNode::new(
            StmtKind::Assign {
                target,
                value: lit_int(&ast, 2),
            },
            Position::new(2, 1),
        ));
        let let_stmt = ast
            .stmts
            .alloc(StmtNode::new(StmtKind::Let { decls, body }, Position::new(1, 1)));
        let errors = Checker::new(&mut interner).check_program(let_stmt);
        assert!(errors.iter().any(|e| matches!(e, SemanticError::NotAssignable { .. })));
    }

    #[test]
    fn condition_must_be_boolean() {
        let mut interner = Interner::new();
        let ast = Ast::new();
        let cond = lit_int(&ast, 1);
        let body = ast.stmts.alloc(StmtNode::new(StmtKind::Noop, Position::new(1, 1)));
        let while_stmt = ast
            .stmts
            .alloc(StmtNode::new(StmtKind::While { cond, body }, Position::new(1, 1)));
        let errors = Checker::new(&mut interner).check_program(while_stmt);
        assert!(errors.iter().any(|e| matches!(e, SemanticError::TypeMismatch { .. })));
    }
}
