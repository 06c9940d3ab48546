use triangle_base::Position;

use crate::ast::{Argument, ExprKind, ExprNode, Stmt, StmtKind, StmtNode};
use crate::token::TokenKind;

use super::decl::DeclarationParsing;
use super::error::SyntaxError;
use super::expr::ExpressionParsing;
use super::ident::IdentifierParsing;
use super::Parser;

pub trait StatementParsing<'a> {
    /// `single-command (';' single-command)*`
    fn parse_command(&mut self) -> Result<Stmt<'a>, SyntaxError>;

    fn parse_single_command(&mut self) -> Result<Stmt<'a>, SyntaxError>;

    /// `'(' (argument (',' argument)*)? ')'`
    fn parse_call_args(&mut self) -> Result<&'a [Argument<'a>], SyntaxError>;

    fn parse_argument(&mut self) -> Result<Argument<'a>, SyntaxError>;
}

impl<'a, 'i> StatementParsing<'a> for Parser<'a, 'i> {
    fn parse_command(&mut self) -> Result<Stmt<'a>, SyntaxError> {
        let first = self.parse_single_command()?;
        if !self.at(TokenKind::Semicolon) {
            return Ok(first);
        }
        let position = first.position;
        let mut commands = vec![first];
        while self.at(TokenKind::Semicolon) {
            self.advance();
            commands.push(self.parse_single_command()?);
        }
        Ok(self.ast().stmts.alloc(StmtNode::new(
            StmtKind::Block(self.ast().stmts_list.alloc_slice(commands)),
            position,
        )))
    }

    fn parse_single_command(&mut self) -> Result<Stmt<'a>, SyntaxError> {
        let position = self.position();

        // `begin ... end` is transparent: it groups a command without
        // wrapping it in anything the rest of the pipeline needs to see.
        if self.at(TokenKind::Begin) {
            self.advance();
            let body = self.parse_command()?;
            self.expect(TokenKind::End)?;
            return Ok(body);
        }

        let kind = self.parse_single_command_kind(position)?;
        Ok(self.ast().stmts.alloc(StmtNode::new(kind, position)))
    }

    fn parse_call_args(&mut self) -> Result<&'a [Argument<'a>], SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) {
            loop {
                args.push(self.parse_argument()?);
                if self.at(TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(self.ast().args_list.alloc_slice(args))
    }

    fn parse_argument(&mut self) -> Result<Argument<'a>, SyntaxError> {
        if self.at(TokenKind::Var) {
            self.advance();
            Ok(Argument::VarArgument(self.parse_identifier()?))
        } else {
            Ok(Argument::Expression(self.parse_expression()?))
        }
    }
}

impl<'a, 'i> Parser<'a, 'i> {
    fn parse_single_command_kind(
        &mut self,
        position: Position,
    ) -> Result<StmtKind<'a>, SyntaxError> {
        match self.peek_kind() {
            TokenKind::Identifier if self.peek_at(1) == TokenKind::LParen => {
                let name = self.parse_name()?;
                let args = self.parse_call_args()?;
                let call = self
                    .ast()
                    .exprs
                    .alloc(ExprNode::new(ExprKind::FunCall { name, args }, position));
                Ok(StmtKind::Expression(call))
            }
            TokenKind::Identifier => {
                let target = self.parse_identifier()?;
                self.expect(TokenKind::Assign)?;
                let value = self.parse_expression()?;
                Ok(StmtKind::Assign { target, value })
            }
            TokenKind::Let => {
                self.advance();
                let decls = self.parse_declarations()?;
                self.expect(TokenKind::In)?;
                let body = self.parse_single_command()?;
                Ok(StmtKind::Let { decls, body })
            }
            TokenKind::If => {
                self.advance();
                let cond = self.parse_expression()?;
                self.expect(TokenKind::Then)?;
                let consequent = self.parse_single_command()?;
                self.expect(TokenKind::Else)?;
                let alternative = self.parse_single_command()?;
                Ok(StmtKind::If {
                    cond,
                    consequent: Some(consequent),
                    alternative: Some(alternative),
                })
            }
            TokenKind::While => {
                self.advance();
                let cond = self.parse_expression()?;
                self.expect(TokenKind::Do)?;
                let body = self.parse_single_command()?;
                Ok(StmtKind::While { cond, body })
            }
            TokenKind::Loop => {
                self.advance();
                let loop_body = self.parse_single_command()?;
                self.expect(TokenKind::While)?;
                let cond = self.parse_expression()?;
                self.expect(TokenKind::Do)?;
                let do_body = self.parse_single_command()?;
                Ok(StmtKind::LoopWhile {
                    loop_body,
                    cond,
                    do_body,
                })
            }
            TokenKind::Repeat => {
                self.advance();
                let body = self.parse_single_command()?;
                match self.peek_kind() {
                    TokenKind::While => {
                        self.advance();
                        let cond = self.parse_expression()?;
                        Ok(StmtKind::RepeatWhile { body, cond })
                    }
                    TokenKind::Until => {
                        self.advance();
                        let cond = self.parse_expression()?;
                        Ok(StmtKind::RepeatUntil { body, cond })
                    }
                    _ => Err(self.error(format!(
                        "expected 'while' or 'until', found {}",
                        self.peek().describe()
                    ))),
                }
            }
            _ => Ok(StmtKind::Noop),
        }
    }
}
