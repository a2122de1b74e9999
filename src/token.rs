//! Token kinds and the keyword table.
//!
//! A [`Token`] is the smallest meaningful unit the lexer produces; the
//! parser never looks at source text directly, only at the token stream.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The kind of a token. `PartialEq`/`Clone`/`Copy` let the parser compare
/// and stash kinds cheaply while walking the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    String,
    True,
    False,
    Ident,
    Let,
    If,
    Else,
    While,
    Return,
    Function,
    And,
    Or,
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Pow,
    Assign,
    Equal,
    NotEqual,
    Bang,
    Lt,
    Gt,
    Lte,
    Gte,
    Lparen,
    Rparen,
    Lbrace,
    Rbrace,
    Lbracket,
    Rbracket,
    Comma,
    Semicolon,
    Eof,
}

/// A single token: its kind, plus the exact source lexeme.
///
/// Numeric tokens keep their textual form (`"3.14"`, `"-2"`); string tokens
/// hold the unescaped body with the surrounding quotes stripped off.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}

fn keyword_table() -> &'static HashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        HashMap::from([
            ("let", TokenKind::Let),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("return", TokenKind::Return),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("func", TokenKind::Function),
            ("and", TokenKind::And),
            ("or", TokenKind::Or),
        ])
    })
}

/// Looks up `ident` in the keyword table, returning the keyword's
/// `TokenKind` or `None` if `ident` is a plain identifier.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    keyword_table().get(ident).copied()
}

/// Binary-operator precedence, lowest to highest. Higher values bind
/// tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest = 0,
    Comparison = 1,
    Additive = 2,
    Multiplicative = 3,
    Power = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Precedence/associativity for a binary operator token, or `None` if the
/// token is not a binary operator.
pub fn op_info(kind: TokenKind) -> Option<(Precedence, Assoc)> {
    use Assoc::*;
    use Precedence::*;
    use TokenKind::*;
    match kind {
        Or | And => Some((Lowest, Left)),
        Lt | Lte | Gt | Gte | Equal | NotEqual => Some((Comparison, Left)),
        Plus | Minus => Some((Additive, Left)),
        Mul | Div => Some((Multiplicative, Left)),
        Mod => Some((Power, Left)),
        Pow => Some((Power, Right)),
        _ => None,
    }
}

pub fn is_binary_op(kind: TokenKind) -> bool {
    op_info(kind).is_some()
}
