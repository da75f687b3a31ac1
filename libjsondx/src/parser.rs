//! Phase 2: Value Parser
//!
//! Recursive descent over the token sequence, one token of lookahead.
//!
//! ```text
//! value   := object | array | STRING | NUMBER | TRUE | FALSE | NULL
//! object  := LBRACE [ pair ( COMMA pair )* ] RBRACE
//! pair    := STRING COLON value
//! array   := LBRACKET [ value ( COMMA value )* ] RBRACKET
//! ```
//!
//! The parser fails eagerly at the first token that cannot continue the
//! current production and never returns a partial value. Classification of
//! the failure is deferred to the classifier, which sees the raw source.

use crate::error::{Offending, ParseFailure};
use crate::scanner::{Token, TokenKind};
use crate::value::Value;
use num_bigint::BigInt;

/// Parse a token sequence into a value.
///
/// The sequence must end with exactly one `End` token, as produced by the
/// scanner. Tokens left over after a complete root value are a failure
/// positioned at the first leftover token.
pub(crate) fn parse_tokens(tokens: &[Token], max_depth: usize) -> Result<Value, ParseFailure> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        max_depth,
    };
    let value = parser.parse_value()?;
    let trailing = parser.peek();
    if trailing.kind != TokenKind::End {
        return Err(parser.fail_at(trailing));
    }
    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Current token. The scanner guarantees a trailing `End`, so the
    /// position never runs past the slice.
    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> &'a Token {
        let token = self.peek();
        self.pos += 1;
        token
    }

    /// Build a mismatch failure at a token. The offending character is the
    /// first character of the token's raw text, or the end-of-input
    /// sentinel for `End`.
    fn fail_at(&self, token: &Token) -> ParseFailure {
        let offending = match token.text.chars().next() {
            Some(c) => Offending::Char(c),
            None => Offending::EndOfInput,
        };
        ParseFailure::Mismatch {
            line: token.line,
            column: token.column,
            offset: token.offset,
            offending,
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseFailure> {
        let token = self.peek();
        match token.kind {
            TokenKind::LBrace => self.parse_object(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::String => {
                let token = self.bump();
                Ok(Value::String(decode_string(&token.text)))
            }
            TokenKind::Number => {
                let token = self.bump();
                self.convert_number(token)
            }
            TokenKind::True => {
                self.bump();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.bump();
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.bump();
                Ok(Value::Null)
            }
            _ => Err(self.fail_at(token)),
        }
    }

    /// Guard one level of nesting, failing once the limit is exceeded.
    fn enter(&mut self, open: &Token) -> Result<(), ParseFailure> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseFailure::TooDeep {
                line: open.line,
                column: open.column,
                offset: open.offset,
            });
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value, ParseFailure> {
        let open = self.bump(); // LBrace
        self.enter(open)?;
        let mut pairs: Vec<(String, Value)> = Vec::new();
        if self.peek().kind == TokenKind::RBrace {
            self.bump();
            self.depth -= 1;
            return Ok(Value::Object(pairs));
        }
        loop {
            let key_token = self.peek();
            if key_token.kind != TokenKind::String {
                return Err(self.fail_at(key_token));
            }
            self.bump();
            let key = decode_string(&key_token.text);

            let colon = self.peek();
            if colon.kind != TokenKind::Colon {
                return Err(self.fail_at(colon));
            }
            self.bump();

            let value = self.parse_value()?;

            // Last write wins on duplicate keys, position preserved.
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(pair) => pair.1 = value,
                None => pairs.push((key, value)),
            }

            let next = self.peek();
            match next.kind {
                TokenKind::Comma => {
                    self.bump();
                }
                TokenKind::RBrace => {
                    self.bump();
                    self.depth -= 1;
                    return Ok(Value::Object(pairs));
                }
                _ => return Err(self.fail_at(next)),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseFailure> {
        let open = self.bump(); // LBracket
        self.enter(open)?;
        let mut items = Vec::new();
        if self.peek().kind == TokenKind::RBracket {
            self.bump();
            self.depth -= 1;
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            let next = self.peek();
            match next.kind {
                TokenKind::Comma => {
                    self.bump();
                }
                TokenKind::RBracket => {
                    self.bump();
                    self.depth -= 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.fail_at(next)),
            }
        }
    }

    /// The numeric subtype is lexical: a decimal point or exponent makes a
    /// float, plain digits make an integer, regardless of magnitude.
    fn convert_number(&self, token: &Token) -> Result<Value, ParseFailure> {
        let raw = &token.text;
        if raw.contains(['.', 'e', 'E']) {
            raw.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.fail_at(token))
        } else {
            raw.parse::<BigInt>()
                .map(Value::Integer)
                .map_err(|_| self.fail_at(token))
        }
    }
}

/// Strip the surrounding quotes and decode standard escape sequences.
///
/// The scanner guarantees the raw text starts and ends with an unescaped
/// quote. Unknown escapes and malformed `\u` sequences pass through
/// literally rather than failing, keeping string handling total over
/// whatever the scanner accepted.
fn decode_string(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    if !inner.contains('\\') {
        return inner.to_string();
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
