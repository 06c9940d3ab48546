//! A hand-rolled scanner for Triangle source text.
//!
//! The token source is, per the spec, an external collaborator of the
//! compiler core — the parser only assumes it can ask for "the next
//! token". This module exists so the workspace is runnable end to end; it
//! is deliberately small.
//!
//! Comments run from `!` to the end of the line. Operators are a maximal
//! run of graphic characters not already claimed by punctuation.

use triangle_base::Position;

use crate::token::{Token, TokenKind};

const GRAPHIC_CHARS: &str = "+-*/\\=<>&|~^@?$#%";

pub struct Lexer<'s> {
    source: &'s [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the entire source into a token vector, terminated by one `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek_byte() {
                Some(b) if b.is_ascii_whitespace() => {
                    self.bump();
                }
                Some(b'!') => {
                    while let Some(b) = self.peek_byte() {
                        if b == b'\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Token {
        self.skip_trivia();
        let start = self.position();

        let byte = match self.peek_byte() {
            None => return Token::new(TokenKind::Eof, None, start),
            Some(b) => b,
        };

        if byte.is_ascii_digit() {
            return self.scan_int_literal(start);
        }
        if byte.is_ascii_alphabetic() || byte == b'_' {
            return self.scan_identifier_or_keyword(start);
        }
        if byte == b'\'' {
            return self.scan_char_literal(start);
        }
        if byte == b':' && self.peek_at(1) == Some(b'=') {
            self.bump();
            self.bump();
            return Token::new(TokenKind::Assign, None, start);
        }
        if let Some(kind) = single_char_punctuation(byte) {
            self.bump();
            return Token::new(kind, None, start);
        }
        if (byte as char).is_ascii() && GRAPHIC_CHARS.contains(byte as char) {
            return self.scan_operator(start);
        }

        // Unknown byte: consume it and surface it as a one-character
        // operator so the parser can report a proper syntax error rather
        // than the lexer silently looping.
        self.bump();
        Token::new(
            TokenKind::Operator,
            Some((byte as char).to_string()),
            start,
        )
    }

    fn scan_int_literal(&mut self, start: Position) -> Token {
        let mut text = String::new();
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_digit() {
                text.push(b as char);
                self.bump();
            } else {
                break;
            }
        }
        Token::new(TokenKind::IntLiteral, Some(text), start)
    }

    fn scan_identifier_or_keyword(&mut self, start: Position) -> Token {
        let mut text = String::new();
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_alphanumeric() || b == b'_' {
                text.push(b as char);
                self.bump();
            } else {
                break;
            }
        }
        match TokenKind::keyword_from_text(&text) {
            Some(kind) => Token::new(kind, None, start),
            None => Token::new(TokenKind::Identifier, Some(text), start),
        }
    }

    fn scan_char_literal(&mut self, start: Position) -> Token {
        self.bump(); // opening quote
        let ch = self.bump().map(|b| b as char).unwrap_or('\0');
        self.bump(); // closing quote (assumed present; malformed input is the lexer's problem, not ours)
        Token::new(TokenKind::CharLiteral, Some(ch.to_string()), start)
    }

    fn scan_operator(&mut self, start: Position) -> Token {
        // `~` alone is the alternative declaration-body separator; keep it
        // distinguishable from general operator text so the parser can
        // accept it in exactly the contexts `is` is accepted.
        if self.peek_byte() == Some(b'~') && !matches!(self.peek_at(1), Some(b) if GRAPHIC_CHARS.contains(b as char))
        {
            self.bump();
            return Token::new(TokenKind::Tilde, None, start);
        }
        let mut text = String::new();
        while let Some(b) = self.peek_byte() {
            if GRAPHIC_CHARS.contains(b as char) {
                text.push(b as char);
                self.bump();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Operator, Some(text), start)
    }
}

fn single_char_punctuation(byte: u8) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match byte {
        b';' => Semicolon,
        b',' => Comma,
        b':' => Colon,
        b'.' => Dot,
        b'[' => LBracket,
        b']' => RBracket,
        b'(' => LParen,
        b')' => RParen,
        b'{' => LBrace,
        b'}' => RBrace,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn scans_keywords_and_identifiers() {
        assert_eq!(
            kinds("let var x in"),
            vec![
                TokenKind::Let,
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::In,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn scans_int_and_char_literals() {
        let tokens = Lexer::new("42 'A'").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[0].text.as_deref(), Some("42"));
        assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[1].text.as_deref(), Some("A"));
    }

    #[test]
    fn scans_assign_vs_colon() {
        assert_eq!(
            kinds("x := 1; y : Integer"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntLiteral,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn scans_operators_as_maximal_runs() {
        let tokens = Lexer::new("a <= b \\/ c").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text.as_deref(), Some("<="));
        assert_eq!(tokens[3].kind, TokenKind::Operator);
        assert_eq!(tokens[3].text.as_deref(), Some("\\/"));
    }

    #[test]
    fn skips_bang_comments() {
        assert_eq!(
            kinds("x ! this is a comment\n:= 1"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntLiteral,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn scans_tilde_as_its_own_kind() {
        assert_eq!(kinds("~"), vec![TokenKind::Tilde, TokenKind::Eof]);
    }
}
