//! Read/write cursors over one item.
//!
//! A cursor is obtained by indexing a document with a key. Reads consume
//! one token each, writes append one token each, and both chain. The
//! first successful write of a cursor (or the first after a read)
//! replaces the item's previous content; a failed operation parks the
//! cursor in the invalid state without touching the destination or the
//! already appended tokens. A write against an invalid cursor that still
//! has an item re-validates it and appends.

use std::borrow::Cow;

use lexer::TokenKind;

use crate::{
    error::ErrorKind,
    item::{Item, ValueToken},
    string,
    value::{self, Integer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Reading,
    Writing,
    Invalid,
}

/// Chainable, type-directed handle over one item of a document.
pub struct Cursor<'doc, 'buf> {
    item: Option<&'doc mut Item<'buf>>,
    state: State,
    /// Next unconsumed token while reading.
    next: usize,
}

impl<'doc, 'buf> Cursor<'doc, 'buf> {
    pub(crate) fn over(item: &'doc mut Item<'buf>) -> Self {
        Cursor { item: Some(item), state: State::Fresh, next: 0 }
    }

    /// Cursor for a key the document refused (bad grammar or capacity).
    /// Every operation on it is a no-op.
    pub(crate) fn detached() -> Self {
        Cursor { item: None, state: State::Invalid, next: 0 }
    }

    /// False once an operation has failed or the key was refused.
    pub fn is_valid(&self) -> bool {
        self.state != State::Invalid
    }

    /// Reads the next token into `dest`. On mismatch or overflow the
    /// cursor invalidates and `dest` keeps its previous value; earlier
    /// reads of the same cursor are not rolled back.
    pub fn read<T: ReadValue>(&mut self, dest: &mut T) -> &mut Self {
        if !self.begin_read() {
            return self;
        }
        let decoded = match self.current_token() {
            Some(token) => T::decode(token.kind, token.text.as_ref()),
            None => None,
        };
        match decoded {
            Some(decoded) => {
                *dest = decoded;
                self.next += 1;
            }
            None => self.fail(ErrorKind::TypeMismatch),
        }
        self
    }

    /// Borrowing read of an escape-free string token: `dest` is pointed
    /// at the stored bytes between the quotes, without copying. Strings
    /// that contain escape sequences fail the read.
    pub fn read_view<'c>(&'c mut self, dest: &mut &'c str) {
        if !self.begin_read() {
            return;
        }
        let viewable = matches!(
            self.current_token(),
            Some(token) if token.kind == (TokenKind::Str { escaped: false })
        );
        if !viewable {
            self.fail(ErrorKind::TypeMismatch);
            return;
        }
        let index = self.next;
        self.next += 1;
        if let Some(item) = self.item.as_deref() {
            *dest = string::view(item.tokens[index].text.as_ref());
        }
    }

    /// Appends one value (or whitespace marker). An invalid value
    /// invalidates the cursor and emits nothing.
    pub fn write<T: WriteValue>(&mut self, value: T) -> &mut Self {
        if self.item.is_none() {
            return self;
        }
        match value.encode() {
            Some(WriteOp::Value { kind, text }) => self.append(kind, text),
            Some(WriteOp::Whitespace(run)) => self.append_whitespace(run),
            Some(WriteOp::Nothing) => {}
            None => self.fail(ErrorKind::InvalidValue),
        }
        self
    }

    /// Enters the reading state, restarting at the first token when the
    /// cursor was not already reading.
    fn begin_read(&mut self) -> bool {
        match self.state {
            State::Invalid => false,
            State::Reading => true,
            State::Fresh | State::Writing => {
                self.next = 0;
                self.state = State::Reading;
                true
            }
        }
    }

    fn current_token(&self) -> Option<&ValueToken<'buf>> {
        self.item.as_deref().and_then(|item| item.tokens.get(self.next))
    }

    fn append(&mut self, kind: TokenKind, text: String) {
        let clear = matches!(self.state, State::Fresh | State::Reading);
        let Some(item) = self.item.as_deref_mut() else { return };
        if clear {
            item.clear();
        }
        let separator = if item.tokens.is_empty() {
            Cow::Borrowed("")
        } else if item.trailing.is_empty() {
            Cow::Borrowed(" ")
        } else {
            std::mem::replace(&mut item.trailing, Cow::Borrowed(""))
        };
        item.tokens.push(ValueToken { kind, text: Cow::Owned(text), separator });
        self.state = State::Writing;
    }

    /// Marker whitespace: before the first value it accumulates as the
    /// item's leading run, afterwards as its trailing run, which the
    /// next value consumes as its separator.
    fn append_whitespace(&mut self, run: String) {
        let clear = matches!(self.state, State::Fresh | State::Reading);
        let Some(item) = self.item.as_deref_mut() else { return };
        if clear {
            item.clear();
        }
        if item.tokens.is_empty() {
            item.leading.to_mut().push_str(&run);
        } else {
            item.trailing.to_mut().push_str(&run);
        }
        self.state = State::Writing;
    }

    fn fail(&mut self, error: ErrorKind) {
        tracing::trace!(%error, "cursor invalidated");
        self.state = State::Invalid;
    }
}

/// A type the cursor can read a token into.
pub trait ReadValue: Sized {
    /// Converts a token; `None` on mismatch or overflow.
    fn decode(kind: TokenKind, text: &str) -> Option<Self>;
}

impl ReadValue for bool {
    fn decode(kind: TokenKind, _text: &str) -> Option<Self> {
        match kind {
            TokenKind::Yes => Some(true),
            TokenKind::No => Some(false),
            _ => None,
        }
    }
}

macro_rules! impl_read_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl ReadValue for $ty {
            fn decode(kind: TokenKind, text: &str) -> Option<Self> {
                match kind {
                    TokenKind::Integer => <$ty as Integer>::from_decimal(text),
                    TokenKind::HexInteger => <$ty as Integer>::from_hex(&text[2..]),
                    _ => None,
                }
            }
        }
    )*};
}

impl_read_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl ReadValue for f64 {
    fn decode(kind: TokenKind, text: &str) -> Option<Self> {
        match kind {
            TokenKind::Integer | TokenKind::Float => value::float_from_token(text),
            _ => None,
        }
    }
}

impl ReadValue for f32 {
    fn decode(kind: TokenKind, text: &str) -> Option<Self> {
        match kind {
            TokenKind::Integer | TokenKind::Float => value::float32_from_token(text),
            _ => None,
        }
    }
}

impl ReadValue for String {
    fn decode(kind: TokenKind, text: &str) -> Option<Self> {
        match kind {
            TokenKind::Str { .. } => string::decode(text).ok(),
            _ => None,
        }
    }
}

/// One prepared write: a value token, a whitespace run, or nothing
/// (markers with a non-positive count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Value { kind: TokenKind, text: String },
    Whitespace(String),
    Nothing,
}

/// A value or formatting marker the cursor can append.
pub trait WriteValue {
    /// Renders the value; `None` marks it unwritable (NaN, infinity,
    /// negative hex, malformed bytes), which emits nothing.
    fn encode(self) -> Option<WriteOp>;
}

impl WriteValue for bool {
    fn encode(self) -> Option<WriteOp> {
        let (kind, text) = if self {
            (TokenKind::Yes, "yes")
        } else {
            (TokenKind::No, "no")
        };
        Some(WriteOp::Value { kind, text: text.to_owned() })
    }
}

macro_rules! impl_write_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl WriteValue for $ty {
            fn encode(self) -> Option<WriteOp> {
                Some(WriteOp::Value { kind: TokenKind::Integer, text: self.to_decimal() })
            }
        }
    )*};
}

impl_write_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl WriteValue for f64 {
    fn encode(self) -> Option<WriteOp> {
        let text = value::format_float(self)?;
        Some(WriteOp::Value { kind: value::classify_number(&text), text })
    }
}

impl WriteValue for f32 {
    fn encode(self) -> Option<WriteOp> {
        let text = value::format_float32(self)?;
        Some(WriteOp::Value { kind: value::classify_number(&text), text })
    }
}

impl WriteValue for &str {
    fn encode(self) -> Option<WriteOp> {
        let (text, escaped) = string::encode(self);
        Some(WriteOp::Value { kind: TokenKind::Str { escaped }, text })
    }
}

impl WriteValue for &String {
    fn encode(self) -> Option<WriteOp> {
        self.as_str().encode()
    }
}

impl WriteValue for String {
    fn encode(self) -> Option<WriteOp> {
        self.as_str().encode()
    }
}

impl WriteValue for &[u8] {
    /// Raw bytes are accepted only when they are well-formed UTF-8.
    fn encode(self) -> Option<WriteOp> {
        std::str::from_utf8(self).ok()?.encode()
    }
}

impl<const N: usize> WriteValue for &[u8; N] {
    fn encode(self) -> Option<WriteOp> {
        self.as_slice().encode()
    }
}

/// Hexadecimal write format: `0x` plus zero-padded digits. Negative
/// values are unwritable.
#[derive(Debug, Clone, Copy)]
pub struct Hex<T> {
    value: T,
    width: i32,
}

/// `hex(v)` writes `0x` plus the digits of `v`; pad with [`Hex::width`].
pub fn hex<T: Integer>(value: T) -> Hex<T> {
    Hex { value, width: 1 }
}

impl<T> Hex<T> {
    /// Zero-pads to at least `max(width, 1)` digits (clamped).
    pub fn width(self, width: i32) -> Hex<T> {
        Hex { width, ..self }
    }
}

impl<T: Integer> WriteValue for Hex<T> {
    fn encode(self) -> Option<WriteOp> {
        let magnitude = self.value.magnitude()?;
        let text = format!("0x{}", value::format_hex(magnitude, self.width));
        Some(WriteOp::Value { kind: TokenKind::HexInteger, text })
    }
}

/// Fixed-point write format.
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    value: f64,
    precision: i32,
}

/// `fixed(v)` writes `v` with six fractional digits; adjust with
/// [`Fixed::precision`].
pub fn fixed(value: impl Into<f64>) -> Fixed {
    Fixed { value: value.into(), precision: 6 }
}

impl Fixed {
    /// Emits `max(precision, 1)` fractional digits (clamped).
    pub fn precision(self, precision: i32) -> Fixed {
        Fixed { precision, ..self }
    }
}

impl WriteValue for Fixed {
    fn encode(self) -> Option<WriteOp> {
        let text = value::format_fixed(self.value, self.precision)?;
        Some(WriteOp::Value { kind: TokenKind::Float, text })
    }
}

/// Shortest-of-fixed-or-scientific write format.
#[derive(Debug, Clone, Copy)]
pub struct General {
    value: f64,
    precision: i32,
}

/// `general(v)` writes `v` with six significant digits; adjust with
/// [`General::precision`].
pub fn general(value: impl Into<f64>) -> General {
    General { value: value.into(), precision: 6 }
}

impl General {
    /// Keeps `max(precision, 1)` significant digits (clamped).
    pub fn precision(self, precision: i32) -> General {
        General { precision, ..self }
    }
}

impl WriteValue for General {
    fn encode(self) -> Option<WriteOp> {
        let text = value::format_general(self.value, self.precision)?;
        Some(WriteOp::Value { kind: value::classify_number(&text), text })
    }
}

/// Whitespace marker replacing the default single-space separator.
#[derive(Debug, Clone, Copy)]
pub struct Ws {
    fill: u8,
    count: i32,
}

/// `nl(n)` separates the neighbouring values with `n` newlines; a
/// non-positive `n` leaves the default single space.
pub fn nl(count: i32) -> Ws {
    Ws { fill: b'\n', count }
}

/// `sp(n)` separates the neighbouring values with `n` spaces.
pub fn sp(count: i32) -> Ws {
    Ws { fill: b' ', count }
}

/// `tab(n)` separates the neighbouring values with `n` tabs.
pub fn tab(count: i32) -> Ws {
    Ws { fill: b'\t', count }
}

impl WriteValue for Ws {
    fn encode(self) -> Option<WriteOp> {
        if self.count <= 0 {
            return Some(WriteOp::Nothing);
        }
        let run = String::from(char::from(self.fill)).repeat(self.count as usize);
        Some(WriteOp::Whitespace(run))
    }
}
