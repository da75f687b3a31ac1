//! Phase 1: Scanner
//!
//! The scanner converts raw source text into a flat token sequence. It is
//! total: unrecognized input becomes an `Invalid` token carrying the raw
//! text, so every lexical detail needed for diagnosis survives to the
//! classifier. Each token records its 1-based line and column and its byte
//! offset in the original source.

use std::iter::Peekable;
use std::str::CharIndices;

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Quoted string literal, raw text includes the quotes.
    String,
    /// Numeric literal.
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Anything the scanner does not recognize, including an unterminated
    /// string (raw text starts at the opening quote).
    Invalid,
    /// End of input, positioned one column past the final character.
    End,
}

/// A single token with its raw text and source position.
#[derive(Debug, Clone)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Raw source slice, untouched. Empty for `End`.
    pub text: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// Byte offset into the original source.
    pub offset: usize,
}

/// Tokenize source text. Total, never fails.
pub(crate) fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).run()
}

struct Scanner<'a> {
    source: &'a str,
    iter: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            source,
            iter: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Consume one character, advancing line/column bookkeeping.
    fn bump(&mut self) -> Option<char> {
        let (_, ch) = self.iter.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.iter.peek().map(|&(_, c)| c)
    }

    /// Byte offset of the next unconsumed character, or the source length.
    fn peek_offset(&mut self) -> usize {
        self.iter
            .peek()
            .map(|&(i, _)| i)
            .unwrap_or(self.source.len())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t' | '\n' | '\r')) {
            self.bump();
        }
    }

    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let line = self.line;
            let column = self.column;
            let offset = self.peek_offset();
            let Some(ch) = self.peek_char() else {
                tokens.push(Token {
                    kind: TokenKind::End,
                    text: String::new(),
                    line,
                    column,
                    offset,
                });
                return tokens;
            };
            let kind = match ch {
                '{' => self.single(TokenKind::LBrace),
                '}' => self.single(TokenKind::RBrace),
                '[' => self.single(TokenKind::LBracket),
                ']' => self.single(TokenKind::RBracket),
                ':' => self.single(TokenKind::Colon),
                ',' => self.single(TokenKind::Comma),
                '"' => self.scan_string(),
                '-' | '0'..='9' => self.scan_number(),
                'a'..='z' | 'A'..='Z' => self.scan_keyword(),
                _ => self.single(TokenKind::Invalid),
            };
            let end = self.peek_offset();
            tokens.push(Token {
                kind,
                text: self.source[offset..end].to_string(),
                line,
                column,
                offset,
            });
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    /// Scan from an opening quote to the matching unescaped closing quote.
    /// Escape sequences pass through raw; decoding happens in the parser.
    /// An unterminated string consumes the rest of the input as `Invalid`.
    fn scan_string(&mut self) -> TokenKind {
        self.bump(); // opening quote
        loop {
            match self.bump() {
                Some('\\') => {
                    // The escaped character cannot close the string.
                    self.bump();
                }
                Some('"') => return TokenKind::String,
                Some(_) => {}
                None => return TokenKind::Invalid,
            }
        }
    }

    /// Scan an optional `-`, integer digits, optional fraction, optional
    /// exponent. Validity of the digits is the parser's concern.
    fn scan_number(&mut self) -> TokenKind {
        if self.peek_char() == Some('-') {
            self.bump();
        }
        self.scan_digits();
        if self.peek_char() == Some('.') {
            self.bump();
            self.scan_digits();
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            self.scan_digits();
        }
        TokenKind::Number
    }

    fn scan_digits(&mut self) {
        while matches!(self.peek_char(), Some('0'..='9')) {
            self.bump();
        }
    }

    /// Scan a run of letters and match it against the three keywords.
    fn scan_keyword(&mut self) -> TokenKind {
        let start = self.peek_offset();
        while matches!(self.peek_char(), Some('a'..='z' | 'A'..='Z')) {
            self.bump();
        }
        match &self.source[start..self.peek_offset()] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Invalid,
        }
    }
}
