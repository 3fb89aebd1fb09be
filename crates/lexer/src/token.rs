use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier immediately followed by `:` (the colon is a separate token).
    Key,
    /// `:`
    Colon,
    /// A run of ` `, `\t`, `\n`, `\r`.
    Whitespace,
    /// `-`? DIGIT+
    Integer,
    /// `0x` HEXDIGIT+
    HexInteger,
    /// Decimal number with a fraction and/or an exponent.
    Float,
    /// `yes`
    Yes,
    /// `no`
    No,
    /// Quoted string, quotes included in the token text.
    Str {
        /// Whether the lexed content contains at least one escape sequence.
        escaped: bool,
    },
    EndOfInput,
}

impl TokenKind {
    /// Returns true for the kinds that stand for one value of an item.
    #[inline]
    pub fn is_value(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::HexInteger
                | TokenKind::Float
                | TokenKind::Yes
                | TokenKind::No
                | TokenKind::Str { .. }
        )
    }
}

/// One lexed token, preserving the exact source bytes for round-trip fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind,
    text: &'src [u8],
    start: usize,
}

impl<'src> Token<'src> {
    pub(crate) fn new(kind: TokenKind, text: &'src [u8], start: usize) -> Token<'src> {
        Token { kind, text, start }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Raw byte content of the token.
    #[inline]
    pub fn text(&self) -> &'src [u8] {
        self.text
    }

    /// Token content as text.
    #[inline]
    pub fn text_str(&self) -> &'src str {
        // SAFETY: the lexer only emits tokens whose bytes it has validated
        // as well-formed UTF-8.
        unsafe { std::str::from_utf8_unchecked(self.text) }
    }

    /// Byte offset of the token in the source span.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text_str())
    }
}
