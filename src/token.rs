use std::fmt;

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Literal,
    Other,
    /// Marks the end of input. Never part of a stream's contents.
    Empty,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Literal => "literal",
            TokenKind::Other => "other",
            TokenKind::Empty => "empty",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

static EMPTY: Token = Token {
    kind: TokenKind::Empty,
    value: String::new(),
};

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, value)
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Literal, value)
    }

    pub fn other(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Other, value)
    }

    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// Matches by text only, whatever the category.
    pub fn is(&self, value: &str) -> bool {
        self.value == value
    }

    pub fn is_keyword(&self, value: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}

/// Tokens in source order, up to (not including) the first `Empty` token.
///
/// Reads past the last token yield the `Empty` sentinel, so the stream always
/// behaves as if it were terminated by exactly one of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> &Token {
        self.tokens.get(index).unwrap_or(&EMPTY)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn count_keyword(&self, value: &str) -> usize {
        self.tokens
            .iter()
            .filter(|token| token.is_keyword(value))
            .count()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .take_while(|token| token.kind != TokenKind::Empty)
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Forward-only read position in a [`TokenStream`].
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    stream: &'a TokenStream,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Self {
            stream,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.stream.len()
    }

    pub fn peek(&self) -> &'a Token {
        self.stream.get(self.position)
    }

    pub fn peek_nth(&self, n: usize) -> &'a Token {
        self.stream.get(self.position + n)
    }

    pub fn advance(&mut self, n: usize) {
        self.position += n;
    }

    /// Steps over a connective or terminator. The token is not required to
    /// actually be `value`; a mismatch is only traced.
    pub fn expect(&mut self, value: &str) {
        let token = self.peek();
        if !token.is(value) {
            debug!(
                position = self.position,
                expected = value,
                found = %token,
                "skipping unexpected token"
            );
        }
        self.advance(1);
    }
}
