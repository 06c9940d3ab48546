//! Recursive-descent parser, one token of lookahead.
//!
//! Grammar areas live in their own module, each exposing a trait
//! implemented for [`Parser`] — `StatementParsing`, `ExpressionParsing`,
//! `DeclarationParsing`, `IdentifierParsing`, `TypeSigParsing` — so a reader
//! can go straight to the area they care about instead of one flat file.
//! [`Parser`] itself only carries the token cursor and the shared
//! peek/expect/intern primitives every area calls into.

mod decl;
mod error;
mod expr;
mod ident;
mod stmt;
mod typesig;

pub use decl::DeclarationParsing;
pub use error::SyntaxError;
pub use expr::ExpressionParsing;
pub use ident::IdentifierParsing;
pub use stmt::StatementParsing;
pub use typesig::TypeSigParsing;

use triangle_base::{Interner, Position, Symbol};

use crate::ast::{Ast, Stmt};
use crate::token::{Token, TokenKind};

pub struct Parser<'a, 'i> {
    ast: &'a Ast<'a>,
    interner: &'i mut Interner,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a, 'i> Parser<'a, 'i> {
    pub fn new(ast: &'a Ast<'a>, interner: &'i mut Interner, tokens: Vec<Token>) -> Self {
        Self {
            ast,
            interner,
            tokens,
            pos: 0,
        }
    }

    /// Parses an entire program: one command, then end of input.
    pub fn parse_program(&mut self) -> Result<Stmt<'a>, SyntaxError> {
        let command = self.parse_command()?;
        self.expect(TokenKind::Eof)?;
        Ok(command)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn peek_at(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn position(&self) -> Position {
        self.peek().position
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Accepts either `is` or `~` as the declaration-body separator; see
    /// DESIGN.md for why both spellings are accepted.
    fn at_decl_separator(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Is | TokenKind::Tilde)
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.peek_kind() == kind {
            Ok(self.advance())
        } else {
            Err(self.error(format!(
                "expected {kind}, found {}",
                self.peek().describe()
            )))
        }
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.position())
    }

    fn intern(&mut self, text: &str) -> Symbol {
        self.interner.intern(text)
    }

    fn ast(&self) -> &'a Ast<'a> {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use triangle_base::Interner;

    use crate::ast::{Ast, StmtKind};
    use crate::lexer::Lexer;

    use super::*;

    fn parse(source: &str) -> Result<Stmt<'static>, SyntaxError> {
        // Leaked so the arena can outlive this function without a
        // self-referential local; fine for tests, never done in the CLI.
        let ast: &'static Ast<'static> = Box::leak(Box::new(Ast::new()));
        let mut interner = Interner::new();
        let tokens = Lexer::new(source).tokenize();
        Parser::new(ast, &mut interner, tokens).parse_program()
    }

    #[test]
    fn parses_a_bare_assignment() {
        let stmt = parse("x := 1").unwrap();
        assert!(matches!(stmt.kind, StmtKind::Assign { .. }));
    }

    #[test]
    fn parses_a_let_in_command() {
        let stmt = parse("let var x : Integer in x := 1").unwrap();
        assert!(matches!(stmt.kind, StmtKind::Let { .. }));
    }

    #[test]
    fn parses_a_block_of_commands() {
        let stmt = parse("x := 1; y := 2").unwrap();
        match stmt.kind {
            StmtKind::Block(commands) => assert_eq!(commands.len(), 2),
            other => panic!("expected a block, got {:?} as kind", std::mem::discriminant(&other)),
        }
    }

    #[test]
    fn accepts_either_is_or_tilde_as_the_declaration_separator() {
        assert!(parse("let const x is 1 in x := x").is_ok());
        assert!(parse("let const x ~ 1 in x := x").is_ok());
    }

    #[test]
    fn binary_operator_chaining_is_right_associative_by_construction() {
        // a - b - c must parse as a - (b - c): the right operand of the
        // first `-` is produced by a full recursive expression parse, not
        // a primary-expression parse, so it swallows the rest of the chain.
        let stmt = parse("x := a - b - c").unwrap();
        let StmtKind::Assign { value, .. } = stmt.kind else {
            panic!("expected an assignment")
        };
        match &value.kind {
            crate::ast::ExprKind::BinaryOp { right, .. } => {
                assert!(matches!(right.kind, crate::ast::ExprKind::BinaryOp { .. }));
            }
            _ => panic!("expected a binary operation"),
        }
    }

    #[test]
    fn rejects_input_after_a_complete_command() {
        assert!(parse("x := 1 y := 2").is_err());
    }

    #[test]
    fn parses_nested_procedures_and_calls() {
        let source = "let proc p (x : Integer) ~ y := x in p(1)";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn parses_record_and_array_literals() {
        assert!(parse("x := { a := 1, b := 2 }").is_ok());
        assert!(parse("x := [1, 2, 3]").is_ok());
    }

    #[test]
    fn parses_if_and_let_expressions() {
        assert!(parse("x := if true then 1 else 2").is_ok());
        assert!(parse("x := let const y is 1 in y").is_ok());
    }
}
