use crate::{
    token::{Token, TokenKind},
    utf8,
};

/// Lexing failure. Either the bytes are not well-formed UTF-8, or the
/// token grammar was violated. Both reject the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("malformed utf-8 at byte {at}")]
    MalformedUtf8 { at: usize },
    #[error("{message} at byte {at}")]
    Grammar { at: usize, message: &'static str },
}

impl LexError {
    /// Byte offset the error was detected at.
    pub fn at(&self) -> usize {
        match *self {
            LexError::MalformedUtf8 { at } => at,
            LexError::Grammar { at, .. } => at,
        }
    }
}

/// Pull lexer over a fully available byte span.
///
/// Produces keys, colons, whitespace runs and value tokens, validating
/// UTF-8 inline. A leading byte order mark is skipped on construction and
/// never shows up in token text.
pub struct Lexer<'src> {
    pub(crate) source: &'src [u8],
    pub(crate) position: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        let position = if source.starts_with(utf8::BOM) { utf8::BOM.len() } else { 0 };
        Self { source, position }
    }

    /// Lex the next token. Returns `TokenKind::EndOfInput` once the span
    /// is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        let start = self.position();
        let Some(byte) = self.peek() else {
            return Ok(Token::new(TokenKind::EndOfInput, b"", start));
        };
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {
                self.advance_while(is_whitespace);
                Ok(self.token(TokenKind::Whitespace, start))
            }
            b':' => {
                self.advance();
                Ok(self.token(TokenKind::Colon, start))
            }
            b'"' => self.lex_string(start),
            b'-' | b'0'..=b'9' => self.lex_number(start),
            b'A'..=b'Z' | b'a'..=b'z' => self.lex_word(start),
            _ => match utf8::decode(self.rest()) {
                Some(_) => Err(self.grammar(start, "unexpected character")),
                None => Err(LexError::MalformedUtf8 { at: start }),
            },
        }
    }

    /// `-`? DIGIT+ with optional fraction/exponent, or `0x` HEXDIGIT+.
    fn lex_number(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        let negative = self.peek() == Some(b'-');
        if negative {
            self.advance();
        }
        let digits = self.position();
        self.advance_while(|b| b.is_ascii_digit());
        if self.position() == digits {
            return Err(self.grammar(start, "digits required after '-'"));
        }

        if self.slice_from(digits) == b"0".as_slice() && self.peek() == Some(b'x') {
            if negative {
                return Err(self.grammar(start, "hex value cannot be negative"));
            }
            self.advance();
            let hex = self.position();
            self.advance_while(|b| b.is_ascii_hexdigit());
            if self.position() == hex {
                return Err(self.grammar(start, "digits required after '0x'"));
            }
            self.expect_value_boundary()?;
            return Ok(self.token(TokenKind::HexInteger, start));
        }

        let mut kind = TokenKind::Integer;
        if self.peek() == Some(b'.') {
            self.advance();
            let fraction = self.position();
            self.advance_while(|b| b.is_ascii_digit());
            if self.position() == fraction {
                return Err(self.grammar(start, "digits required after decimal point"));
            }
            kind = TokenKind::Float;
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.advance();
            if self.peek() == Some(b'+') {
                return Err(self.grammar(start, "exponent must not carry a plus sign"));
            }
            if self.peek() == Some(b'-') {
                self.advance();
            }
            let exponent = self.position();
            self.advance_while(|b| b.is_ascii_digit());
            if self.position() == exponent {
                return Err(self.grammar(start, "digits required in exponent"));
            }
            kind = TokenKind::Float;
        }
        self.expect_value_boundary()?;
        Ok(self.token(kind, start))
    }

    /// Identifier characters. Followed by `:` this is a key; otherwise
    /// only the bool keywords are legal bare words.
    fn lex_word(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        self.advance_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'));
        if self.peek() == Some(b':') {
            return Ok(self.token(TokenKind::Key, start));
        }
        let word = self.slice_from(start);
        let kind = if word == b"yes".as_slice() {
            TokenKind::Yes
        } else if word == b"no".as_slice() {
            TokenKind::No
        } else {
            return Err(self.grammar(start, "bare word is not a value"));
        };
        self.expect_value_boundary()?;
        Ok(self.token(kind, start))
    }

    /// Quoted string. Raw characters are UTF-8 validated; escapes are
    /// checked for shape only (the escape letter and the hex digit
    /// count), not for the range of the escaped code point.
    fn lex_string(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        self.advance();
        let mut escaped = false;
        loop {
            let Some(byte) = self.peek() else {
                return Err(self.grammar(start, "unterminated string"));
            };
            match byte {
                b'"' => {
                    self.advance();
                    break;
                }
                b'\\' => {
                    escaped = true;
                    self.advance();
                    match self.peek() {
                        Some(b'"' | b'\\' | b't' | b'n' | b'r') => self.advance(),
                        Some(b'u') => {
                            self.advance();
                            self.expect_hex_digits(4)?;
                        }
                        Some(b'U') => {
                            self.advance();
                            self.expect_hex_digits(8)?;
                        }
                        _ => return Err(self.grammar(self.position(), "invalid escape sequence")),
                    }
                }
                _ => match utf8::decode(self.rest()) {
                    Some((_, len)) => self.advance_by(len),
                    None => return Err(LexError::MalformedUtf8 { at: self.position() }),
                },
            }
        }
        self.expect_value_boundary()?;
        Ok(self.token(TokenKind::Str { escaped }, start))
    }

    fn expect_hex_digits(&mut self, count: usize) -> Result<(), LexError> {
        for _ in 0..count {
            match self.peek() {
                Some(b) if b.is_ascii_hexdigit() => self.advance(),
                _ => return Err(self.grammar(self.position(), "truncated unicode escape")),
            }
        }
        Ok(())
    }

    /// A value must be followed by whitespace or the end of the span.
    fn expect_value_boundary(&self) -> Result<(), LexError> {
        match self.peek() {
            None => Ok(()),
            Some(b) if is_whitespace(b) => Ok(()),
            Some(_) => Err(self.grammar(self.position(), "whitespace required after value")),
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        Token::new(kind, self.slice_from(start), start)
    }

    fn grammar(&self, at: usize, message: &'static str) -> LexError {
        LexError::Grammar { at, message }
    }
}

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
