//! A generic, scoped symbol table: one `HashMap` per lexical nesting level,
//! with the display-register depth of each entry recoverable on lookup.
//!
//! `Checker` keeps two of these side by side — one for terms (consts,
//! vars, params, procs, funcs) and one for type names — rather than one
//! table tagged with a namespace enum, mirroring how the spec keeps the
//! term and type scopes independent.

use std::collections::HashMap;

use triangle_base::Symbol;

/// A scope stack of `V`-valued bindings, keyed by interned name.
pub struct SymbolTable<V> {
    scopes: Vec<HashMap<Symbol, V>>,
}

impl<V> SymbolTable<V> {
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Depth of the current scope, with the outermost (global) scope at 0.
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Discards the current scope's bindings. Panics if called on the
    /// global scope — every `enter_scope` must be matched by exactly one
    /// `exit_scope` before the table is dropped.
    pub fn exit_scope(&mut self) {
        assert!(self.scopes.len() > 1, "cannot exit the global scope");
        self.scopes.pop();
    }

    /// Binds `name` in the current (innermost) scope, shadowing any
    /// binding of the same name in an outer scope. Returns the previous
    /// value if `name` was already bound in *this* scope (a duplicate
    /// declaration within one block — the caller turns that into a
    /// semantic error).
    pub fn add(&mut self, name: Symbol, value: V) -> Option<V> {
        self.scopes
            .last_mut()
            .expect("global scope always present")
            .insert(name, value)
    }

    /// Looks up `name` from the innermost scope outward.
    pub fn lookup(&self, name: Symbol) -> Option<&V> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name))
    }

    /// Looks up `name` along with the nesting depth of the scope it was
    /// found in — the code generator uses this to pick which display
    /// register (`L0..L6`) addresses the binding.
    pub fn lookup_with_depth(&self, name: Symbol) -> Option<(usize, &V)> {
        for (depth, scope) in self.scopes.iter().enumerate().rev() {
            if let Some(value) = scope.get(&name) {
                return Some((depth, value));
            }
        }
        None
    }

    /// Whether `name` is already bound in the *current* scope only (used
    /// to detect duplicate declarations within one `let`/parameter list).
    pub fn is_bound_locally(&self, name: Symbol) -> bool {
        self.scopes
            .last()
            .expect("global scope always present")
            .contains_key(&name)
    }
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangle_base::Interner;

    #[test]
    fn lookup_finds_innermost_binding() {
        let mut interner = Interner::new();
        let x = interner.intern("x");
        let mut table: SymbolTable<i32> = SymbolTable::new();
        table.add(x, 1);
        table.enter_scope();
        table.add(x, 2);
        assert_eq!(table.lookup(x), Some(&2));
        table.exit_scope();
        assert_eq!(table.lookup(x), Some(&1));
    }

    #[test]
    fn lookup_with_depth_reports_defining_scope() {
        let mut interner = Interner::new();
        let x = interner.intern("x");
        let mut table: SymbolTable<i32> = SymbolTable::new();
        table.add(x, 1);
        table.enter_scope();
        table.enter_scope();
        assert_eq!(table.lookup_with_depth(x), Some((0, &1)));
        let y = interner.intern("y");
        table.add(y, 2);
        assert_eq!(table.lookup_with_depth(y), Some((2, &2)));
    }

    #[test]
    fn is_bound_locally_ignores_outer_scopes() {
        let mut interner = Interner::new();
        let x = interner.intern("x");
        let mut table: SymbolTable<i32> = SymbolTable::new();
        table.add(x, 1);
        table.enter_scope();
        assert!(!table.is_bound_locally(x));
        table.add(x, 2);
        assert!(table.is_bound_locally(x));
    }

    #[test]
    #[should_panic(expected = "cannot exit the global scope")]
    fn exiting_global_scope_panics() {
        let mut table: SymbolTable<i32> = SymbolTable::new();
        table.exit_scope();
    }
}
