use crate::ast::TypeSig;
use crate::token::TokenKind;

use super::error::SyntaxError;
use super::ident::IdentifierParsing;
use super::Parser;

pub trait TypeSigParsing<'a> {
    /// `identifier | 'array' int-literal 'of' type-sig | 'record' '(' field (',' field)* ')'`
    fn parse_type_sig(&mut self) -> Result<TypeSig<'a>, SyntaxError>;

    /// The return type signature of a `func` declaration or a `func`-shaped
    /// callable parameter; absent (`Void`) for `proc`.
    fn parse_return_type_sig(&mut self) -> Result<TypeSig<'a>, SyntaxError>;
}

impl<'a, 'i> TypeSigParsing<'a> for Parser<'a, 'i> {
    fn parse_type_sig(&mut self) -> Result<TypeSig<'a>, SyntaxError> {
        match self.peek_kind() {
            TokenKind::Identifier => {
                let position = self.position();
                let name = self.parse_name()?;
                Ok(TypeSig::Named(name, position))
            }
            TokenKind::Array => {
                self.advance();
                let size_token = self.expect(TokenKind::IntLiteral)?;
                let size: u32 = size_token
                    .text
                    .as_deref()
                    .unwrap_or("0")
                    .parse()
                    .map_err(|_| self.error("array size must be a non-negative integer"))?;
                self.expect(TokenKind::Of)?;
                let element = self.parse_type_sig()?;
                Ok(TypeSig::Array {
                    size,
                    element: self.ast().type_sigs.alloc(element),
                })
            }
            TokenKind::Record => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                let mut fields = Vec::new();
                loop {
                    let name = self.parse_name()?;
                    self.expect(TokenKind::Colon)?;
                    let field_type = self.parse_type_sig()?;
                    fields.push((name, field_type));
                    if self.at(TokenKind::Comma) {
                        self.advance();
                        continue;
                    }
                    break;
                }
                self.expect(TokenKind::RParen)?;
                Ok(TypeSig::Record(
                    self.ast().type_sig_fields.alloc_slice(fields),
                ))
            }
            _ => Err(self.error(format!(
                "expected a type, found {}",
                self.peek().describe()
            ))),
        }
    }

    fn parse_return_type_sig(&mut self) -> Result<TypeSig<'a>, SyntaxError> {
        if self.at(TokenKind::Colon) {
            self.advance();
            self.parse_type_sig()
        } else {
            Ok(TypeSig::Void)
        }
    }
}
