//! The standard environment every Triangle program starts with: the three
//! primitive type names and the built-in operators and I/O procedures.

use triangle_base::{Interner, Type};

use crate::binding::{Binding, TermKind};
use crate::symbol_table::SymbolTable;

pub fn populate_types(types: &mut SymbolTable<Type>, interner: &mut Interner) {
    types.add(interner.intern("Integer"), Type::Int);
    types.add(interner.intern("Boolean"), Type::Bool);
    types.add(interner.intern("Char"), Type::Char);
}

/// Binary operators, keyed in their own table so `-` (binary subtraction)
/// and `-` (unary negation) can carry different signatures under the same
/// interned symbol without colliding.
pub fn populate_binary_operators(ops: &mut SymbolTable<Type>, interner: &mut Interner) {
    let int_binop = Type::Func {
        params: vec![Type::Int, Type::Int],
        result: Box::new(Type::Int),
    };
    for op in ["+", "-", "*", "/", "\\"] {
        ops.add(interner.intern(op), int_binop.clone());
    }
    let int_cmp = Type::Func {
        params: vec![Type::Int, Type::Int],
        result: Box::new(Type::Bool),
    };
    for op in ["<", "<=", ">", ">="] {
        ops.add(interner.intern(op), int_cmp.clone());
    }
    let int_eq = Type::Func {
        params: vec![Type::Int, Type::Int],
        result: Box::new(Type::Bool),
    };
    ops.add(interner.intern("="), int_eq.clone());
    ops.add(interner.intern("\\="), int_eq);
    let bool_binop = Type::Func {
        params: vec![Type::Bool, Type::Bool],
        result: Box::new(Type::Bool),
    };
    ops.add(interner.intern("/\\"), bool_binop.clone());
    ops.add(interner.intern("\\/"), bool_binop);
}

pub fn populate_unary_operators(ops: &mut SymbolTable<Type>, interner: &mut Interner) {
    ops.add(
        interner.intern("-"),
        Type::Func {
            params: vec![Type::Int],
            result: Box::new(Type::Int),
        },
    );
    ops.add(
        interner.intern("\\"),
        Type::Func {
            params: vec![Type::Bool],
            result: Box::new(Type::Bool),
        },
    );
}

pub fn populate_terms(terms: &mut SymbolTable<Binding>, interner: &mut Interner) {
    terms.add(interner.intern("maxint"), Binding::new(TermKind::Const, Type::Int));
    terms.add(
        interner.intern("putint"),
        Binding::new(
            TermKind::Proc,
            Type::Func {
                params: vec![Type::Int],
                result: Box::new(Type::Void),
            },
        ),
    );
    terms.add(
        interner.intern("put"),
        Binding::new(
            TermKind::Proc,
            Type::Func {
                params: vec![Type::Char],
                result: Box::new(Type::Void),
            },
        ),
    );
    terms.add(
        interner.intern("getint"),
        Binding::new(
            TermKind::Proc,
            Type::Func {
                params: vec![Type::RefOf(Box::new(Type::Int))],
                result: Box::new(Type::Void),
            },
        ),
    );
    terms.add(
        interner.intern("get"),
        Binding::new(
            TermKind::Proc,
            Type::Func {
                params: vec![Type::RefOf(Box::new(Type::Char))],
                result: Box::new(Type::Void),
            },
        ),
    );
    terms.add(
        interner.intern("puteol"),
        Binding::new(
            TermKind::Proc,
            Type::Func {
                params: vec![],
                result: Box::new(Type::Void),
            },
        ),
    );
}
