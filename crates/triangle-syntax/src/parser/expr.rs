use triangle_base::Symbol;

use crate::ast::{Expr, ExprKind, ExprNode};
use crate::token::TokenKind;

use super::decl::DeclarationParsing;
use super::error::SyntaxError;
use super::ident::IdentifierParsing;
use super::stmt::StatementParsing;
use super::Parser;

pub trait ExpressionParsing<'a> {
    /// `primary-expression (operator expression)?`
    ///
    /// The right operand is parsed by recursing into `parse_expression`
    /// itself rather than into `parse_primary_expression`. That is
    /// deliberate: it is what makes a chain like `a - b - c` parse as
    /// `a - (b - c)` instead of left-to-right, and it is carried over
    /// unchanged rather than "fixed" into a precedence climb.
    fn parse_expression(&mut self) -> Result<Expr<'a>, SyntaxError>;

    fn parse_primary_expression(&mut self) -> Result<Expr<'a>, SyntaxError>;

    fn parse_operator(&mut self) -> Result<Symbol, SyntaxError>;
}

impl<'a, 'i> ExpressionParsing<'a> for Parser<'a, 'i> {
    fn parse_expression(&mut self) -> Result<Expr<'a>, SyntaxError> {
        let position = self.position();
        let left = self.parse_primary_expression()?;
        if self.at(TokenKind::Operator) {
            let op = self.parse_operator()?;
            let right = self.parse_expression()?;
            return Ok(self.ast().exprs.alloc(ExprNode::new(
                ExprKind::BinaryOp { op, left, right },
                position,
            )));
        }
        Ok(left)
    }

    fn parse_primary_expression(&mut self) -> Result<Expr<'a>, SyntaxError> {
        let position = self.position();
        match self.peek_kind() {
            TokenKind::IntLiteral => {
                let token = self.advance();
                let value: i64 = token
                    .text
                    .as_deref()
                    .unwrap_or("0")
                    .parse()
                    .map_err(|_| self.error("malformed integer literal"))?;
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::LitInt(value), position)))
            }
            TokenKind::CharLiteral => {
                let token = self.advance();
                let value = token.text.and_then(|t| t.chars().next()).unwrap_or('\0');
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::LitChar(value), position)))
            }
            TokenKind::True => {
                self.advance();
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::LitBool(true), position)))
            }
            TokenKind::False => {
                self.advance();
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::LitBool(false), position)))
            }
            TokenKind::LBracket => self.parse_array_literal(position),
            TokenKind::LBrace => self.parse_record_literal(position),
            TokenKind::LParen => self.parse_parenthesized_or_sequence(position),
            TokenKind::Operator => {
                let op = self.parse_operator()?;
                let operand = self.parse_expression()?;
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::UnaryOp { op, operand }, position)))
            }
            TokenKind::Identifier if self.peek_at(1) == TokenKind::LParen => {
                let name = self.parse_name()?;
                let args = self.parse_call_args()?;
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::FunCall { name, args }, position)))
            }
            TokenKind::Identifier => {
                let ident = self.parse_identifier()?;
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::Identifier(ident), position)))
            }
            TokenKind::If => {
                self.advance();
                let cond = self.parse_expression()?;
                self.expect(TokenKind::Then)?;
                let then_branch = self.parse_expression()?;
                self.expect(TokenKind::Else)?;
                let else_branch = self.parse_expression()?;
                Ok(self.ast().exprs.alloc(ExprNode::new(
                    ExprKind::IfExpression {
                        cond,
                        then_branch,
                        else_branch,
                    },
                    position,
                )))
            }
            TokenKind::Let => {
                self.advance();
                let decls = self.parse_declarations()?;
                self.expect(TokenKind::In)?;
                let body = self.parse_expression()?;
                Ok(self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::LetExpression { decls, body }, position)))
            }
            _ => Err(self.error(format!(
                "expected an expression, found {}",
                self.peek().describe()
            ))),
        }
    }

    fn parse_operator(&mut self) -> Result<Symbol, SyntaxError> {
        let token = self.advance();
        let text = token.text.expect("operator token always carries text");
        Ok(self.intern(&text))
    }
}

impl<'a, 'i> Parser<'a, 'i> {
    fn parse_array_literal(
        &mut self,
        position: triangle_base::Position,
    ) -> Result<Expr<'a>, SyntaxError> {
        self.expect(TokenKind::LBracket)?;
        let mut elements = Vec::new();
        if !self.at(TokenKind::RBracket) {
            loop {
                elements.push(self.parse_expression()?);
                if self.at(TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(self.ast().exprs.alloc(ExprNode::new(
            ExprKind::LitArray(self.ast().exprs_list.alloc_slice(elements)),
            position,
        )))
    }

    fn parse_record_literal(
        &mut self,
        position: triangle_base::Position,
    ) -> Result<Expr<'a>, SyntaxError> {
        self.expect(TokenKind::LBrace)?;
        let mut fields = Vec::new();
        loop {
            let name = self.parse_name()?;
            self.expect(TokenKind::Assign)?;
            let value = self.parse_expression()?;
            fields.push((name, value));
            if self.at(TokenKind::Comma) {
                self.advance();
                continue;
            }
            break;
        }
        self.expect(TokenKind::RBrace)?;
        Ok(self.ast().exprs.alloc(ExprNode::new(
            ExprKind::LitRecord(self.ast().expr_fields.alloc_slice(fields)),
            position,
        )))
    }

    /// `'(' expression ')'` or `'(' command ';' expression ')'`.
    ///
    /// Both start identically, so this tries the plain-grouping shape
    /// first and rewinds to retry as a sequence expression if the
    /// closing paren isn't where grouping would put it.
    fn parse_parenthesized_or_sequence(
        &mut self,
        position: triangle_base::Position,
    ) -> Result<Expr<'a>, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let checkpoint = self.pos;
        if let Ok(expr) = self.parse_expression() {
            if self.at(TokenKind::RParen) {
                self.advance();
                return Ok(expr);
            }
        }
        self.pos = checkpoint;
        let stmt = self.parse_command()?;
        self.expect(TokenKind::Semicolon)?;
        let expr = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(self.ast().exprs.alloc(ExprNode::new(
            ExprKind::SequenceExpression { stmt, expr },
            position,
        )))
    }
}
