use triangle_base::Symbol;

use crate::ast::{Identifier, IdentifierKind, IdentifierNode};
use crate::token::TokenKind;

use super::error::SyntaxError;
use super::expr::ExpressionParsing;
use super::Parser;

pub trait IdentifierParsing<'a> {
    /// `identifier ( '.' identifier | '[' expression ']' )*`
    fn parse_identifier(&mut self) -> Result<Identifier<'a>, SyntaxError>;

    fn parse_name(&mut self) -> Result<Symbol, SyntaxError>;
}

impl<'a, 'i> IdentifierParsing<'a> for Parser<'a, 'i> {
    fn parse_identifier(&mut self) -> Result<Identifier<'a>, SyntaxError> {
        let position = self.position();
        let name = self.parse_name()?;
        let mut ident: Identifier<'a> = self
            .ast()
            .idents
            .alloc(IdentifierNode::new(IdentifierKind::Basic(name), position));

        loop {
            match self.peek_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let field_position = self.position();
                    let field = self.parse_name()?;
                    ident = self.ast().idents.alloc(IdentifierNode::new(
                        IdentifierKind::RecordAccess {
                            record: ident,
                            field,
                        },
                        field_position,
                    ));
                }
                TokenKind::LBracket => {
                    self.advance();
                    let subscript = self.parse_expression()?;
                    self.expect(TokenKind::RBracket)?;
                    ident = self.ast().idents.alloc(IdentifierNode::new(
                        IdentifierKind::ArraySubscript {
                            array: ident,
                            subscript,
                        },
                        position,
                    ));
                }
                _ => break,
            }
        }
        Ok(ident)
    }

    fn parse_name(&mut self) -> Result<Symbol, SyntaxError> {
        if !self.at(TokenKind::Identifier) {
            return Err(self.error(format!(
                "expected an identifier, found {}",
                self.peek().describe()
            )));
        }
        let token = self.advance();
        let text = token.text.expect("identifier token always carries text");
        Ok(self.intern(&text))
    }
}
