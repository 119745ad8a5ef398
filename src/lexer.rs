use crate::error::Span;
use crate::operator::{self, Operator, BOUNDARY_PRECEDENCE};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Operator(Operator),
    /// Sentinel pushed under every line's operators.
    Boundary,
    /// A lexeme that is neither a number nor an operator.
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    pub fn boundary() -> Self {
        Self::new(TokenKind::Boundary, String::new(), Span::new(0, 0))
    }

    /// Classifies a single lexeme.
    pub fn classify(lexeme: &str, span: Span) -> Self {
        let kind = if let Some(op) = Operator::from_lexeme(lexeme) {
            TokenKind::Operator(op)
        } else if operator::is_number(lexeme) {
            // A lone "." passes the shape check but is not a number.
            match lexeme.parse::<f64>() {
                Ok(value) => TokenKind::Number(value),
                Err(_) => TokenKind::Unknown,
            }
        } else {
            TokenKind::Unknown
        };

        Self::new(kind, lexeme.to_string(), span)
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self.kind, TokenKind::Boundary)
    }

    /// Rank on the operator stack; `None` for numbers and unknown lexemes.
    pub fn precedence(&self) -> Option<u8> {
        match self.kind {
            TokenKind::Operator(op) => Some(op.precedence()),
            TokenKind::Boundary => Some(BOUNDARY_PRECEDENCE),
            TokenKind::Number(_) | TokenKind::Unknown => None,
        }
    }
}

/// Rewrites a raw line so that its lexemes are separated by single spaces.
///
/// Every operator character is padded with spaces, surrounding whitespace is
/// trimmed and a leading `-` becomes a subtraction from zero: `-5+2` turns
/// into `0 - 5 + 2`.
pub fn normalize(line: &str) -> String {
    let mut padded = String::with_capacity(line.len() * 2);
    for c in line.chars() {
        if Operator::from_char(c).is_some() {
            padded.push(' ');
            padded.push(c);
            padded.push(' ');
        } else {
            padded.push(c);
        }
    }

    let trimmed = padded.trim();
    let prefixed = if trimmed.starts_with('-') {
        format!("0 {}", trimmed)
    } else {
        trimmed.to_string()
    };

    prefixed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a normalized line into tokens, recording each lexeme's span.
pub struct Lexer {
    source: String,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: String) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.skip_separators();
            if self.is_at_end() {
                break;
            }
            self.start = self.current;
            self.scan_lexeme();
        }

        std::mem::take(&mut self.tokens)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.current += c.len_utf8();
        }
    }

    fn scan_lexeme(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            self.current += c.len_utf8();
        }

        let lexeme = &self.source[self.start..self.current];
        let token = Token::classify(lexeme, Span::new(self.start, self.current));
        self.tokens.push(token);
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }
}

/// Normalizes a raw line and tokenizes it.
pub fn tokenize(line: &str) -> (String, Vec<Token>) {
    let mut lexer = Lexer::new(normalize(line));
    let tokens = lexer.scan_tokens();
    (lexer.source, tokens)
}
