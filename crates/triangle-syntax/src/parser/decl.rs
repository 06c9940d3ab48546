use crate::ast::{DeclKind, DeclNode, Declaration, ParameterKind, ParameterNode};
use crate::ast::{Parameter, Stmt};
use crate::token::TokenKind;

use super::error::SyntaxError;
use super::expr::ExpressionParsing;
use super::ident::IdentifierParsing;
use super::stmt::StatementParsing;
use super::typesig::TypeSigParsing;
use super::Parser;

pub trait DeclarationParsing<'a> {
    /// `single-declaration (';' single-declaration)*`
    fn parse_declarations(&mut self) -> Result<&'a [Declaration<'a>], SyntaxError>;

    fn parse_single_declaration(&mut self) -> Result<Declaration<'a>, SyntaxError>;

    /// `'(' (parameter (',' parameter)*)? ')'`
    fn parse_formal_params(&mut self) -> Result<&'a [Parameter<'a>], SyntaxError>;

    fn parse_parameter(&mut self) -> Result<Parameter<'a>, SyntaxError>;
}

impl<'a, 'i> DeclarationParsing<'a> for Parser<'a, 'i> {
    fn parse_declarations(&mut self) -> Result<&'a [Declaration<'a>], SyntaxError> {
        let mut decls = vec![self.parse_single_declaration()?];
        while self.at(TokenKind::Semicolon) && starts_declaration(self.peek_at(1)) {
            self.advance();
            decls.push(self.parse_single_declaration()?);
        }
        Ok(self.ast().decls_list.alloc_slice(decls))
    }

    fn parse_single_declaration(&mut self) -> Result<Declaration<'a>, SyntaxError> {
        let position = self.position();
        let kind = match self.peek_kind() {
            TokenKind::Const => {
                self.advance();
                let name = self.parse_name()?;
                self.consume_decl_separator()?;
                let value = self.parse_expression()?;
                DeclKind::Const { name, value }
            }
            TokenKind::Var => {
                self.advance();
                let name = self.parse_name()?;
                self.expect(TokenKind::Colon)?;
                let type_sig = self.parse_type_sig()?;
                DeclKind::Var { name, type_sig }
            }
            TokenKind::Type => {
                self.advance();
                let name = self.parse_name()?;
                self.consume_decl_separator()?;
                let type_sig = self.parse_type_sig()?;
                DeclKind::Type { name, type_sig }
            }
            TokenKind::Proc => {
                self.advance();
                let name = self.parse_name()?;
                let params = self.parse_formal_params()?;
                self.consume_decl_separator()?;
                let body: Stmt<'a> = self.parse_command()?;
                DeclKind::Proc { name, params, body }
            }
            TokenKind::Func => {
                self.advance();
                let name = self.parse_name()?;
                let params = self.parse_formal_params()?;
                let return_type_sig = self.parse_return_type_sig()?;
                self.consume_decl_separator()?;
                let body = self.parse_expression()?;
                DeclKind::Func {
                    name,
                    params,
                    return_type_sig,
                    body,
                }
            }
            _ => {
                return Err(self.error(format!(
                    "expected a declaration, found {}",
                    self.peek().describe()
                )))
            }
        };
        Ok(self.ast().decls.alloc(DeclNode::new(kind, position)))
    }

    fn parse_formal_params(&mut self) -> Result<&'a [Parameter<'a>], SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.at(TokenKind::RParen) {
            loop {
                params.push(self.parse_parameter()?);
                if self.at(TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(self.ast().params_list.alloc_slice(params))
    }

    fn parse_parameter(&mut self) -> Result<Parameter<'a>, SyntaxError> {
        let position = self.position();
        let kind = match self.peek_kind() {
            TokenKind::Var => {
                self.advance();
                let name = self.parse_name()?;
                self.expect(TokenKind::Colon)?;
                let type_sig = self.parse_type_sig()?;
                ParameterKind::Var { name, type_sig }
            }
            TokenKind::Proc => {
                self.advance();
                let name = self.parse_name()?;
                let params = self.parse_formal_params()?;
                ParameterKind::Func {
                    name,
                    params,
                    return_type_sig: None,
                }
            }
            TokenKind::Func => {
                self.advance();
                let name = self.parse_name()?;
                let params = self.parse_formal_params()?;
                self.expect(TokenKind::Colon)?;
                let return_type_sig = self.parse_type_sig()?;
                ParameterKind::Func {
                    name,
                    params,
                    return_type_sig: Some(return_type_sig),
                }
            }
            TokenKind::Identifier => {
                let name = self.parse_name()?;
                self.expect(TokenKind::Colon)?;
                let type_sig = self.parse_type_sig()?;
                ParameterKind::Value { name, type_sig }
            }
            _ => {
                return Err(self.error(format!(
                    "expected a parameter, found {}",
                    self.peek().describe()
                )))
            }
        };
        Ok(self.ast().params.alloc(ParameterNode::new(kind, position)))
    }
}

impl<'a, 'i> Parser<'a, 'i> {
    fn consume_decl_separator(&mut self) -> Result<(), SyntaxError> {
        if self.at_decl_separator() {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!(
                "expected 'is' or '~', found {}",
                self.peek().describe()
            )))
        }
    }
}

fn starts_declaration(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Const | TokenKind::Var | TokenKind::Type | TokenKind::Proc | TokenKind::Func
    )
}
