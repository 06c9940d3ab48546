//! Token kinds produced by the lexer and consumed by the parser.

use triangle_base::Position;

/// The kind of a scanned token. Literal and identifier tokens carry their
/// text separately on [`Token`]; keyword and punctuation tokens are fully
/// described by their `TokenKind` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    IntLiteral,
    CharLiteral,
    Identifier,
    /// An operator is arbitrary symbolic text (`+`, `<=`, `\/`, a user's own
    /// combination of graphic characters); its text lives on the `Token`.
    Operator,

    // Keywords
    Begin,
    End,
    Let,
    In,
    If,
    Then,
    Else,
    While,
    Do,
    Loop,
    Repeat,
    Until,
    Var,
    Const,
    Proc,
    Func,
    Type,
    Record,
    Array,
    Of,
    Is,
    After,
    Return,
    True,
    False,

    // Punctuation
    Semicolon,
    Comma,
    Colon,
    Dot,
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Assign,

    /// An operator-shaped token used as an alternative declaration-body
    /// separator (`~`); see DESIGN.md for why both `is` and `~` are
    /// accepted.
    Tilde,

    Eof,
}

impl TokenKind {
    pub fn keyword_from_text(text: &str) -> Option<TokenKind> {
        use TokenKind::*;
        Some(match text {
            "begin" => Begin,
            "end" => End,
            "let" => Let,
            "in" => In,
            "if" => If,
            "then" => Then,
            "else" => Else,
            "while" => While,
            "do" => Do,
            "loop" => Loop,
            "repeat" => Repeat,
            "until" => Until,
            "var" => Var,
            "const" => Const,
            "proc" => Proc,
            "func" => Func,
            "type" => Type,
            "record" => Record,
            "array" => Array,
            "of" => Of,
            "is" => Is,
            "after" => After,
            "return" => Return,
            "true" => True,
            "false" => False,
            _ => return None,
        })
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single scanned token: its kind, its literal text (when meaningful), and
/// its starting position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: Option<String>, position: Position) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    /// The token's text, or its kind's debug name when it carries none
    /// (used for error messages).
    pub fn describe(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => format!("{}", self.kind),
        }
    }
}
