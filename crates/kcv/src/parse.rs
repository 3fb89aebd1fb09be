//! Token stream to item assembly.

use std::borrow::Cow;

use lexer::{Lexer, TokenKind};

use crate::{
    error::ErrorKind,
    item::{Item, ValueToken},
};

/// Item budget of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Capacity {
    Unbounded,
    AtMost(usize),
}

impl Capacity {
    /// Whether one more item fits next to `count` existing ones.
    pub fn admits(self, count: usize) -> bool {
        match self {
            Capacity::Unbounded => true,
            Capacity::AtMost(max) => count < max,
        }
    }
}

/// Parses `source` into items, borrowing all text from it.
///
/// Whitespace attachment: the run between the colon and the first value
/// becomes the item's leading whitespace, the run after its last value
/// its trailing whitespace; runs between values collapse to one space,
/// runs between the document edge and a key are dropped.
pub(crate) fn parse<'buf>(source: &'buf [u8], capacity: Capacity) -> Result<Vec<Item<'buf>>, ErrorKind> {
    let mut lexer = Lexer::new(source);
    let mut items: Vec<Item<'buf>> = Vec::new();
    let mut whitespace: Option<&'buf str> = None;

    loop {
        let token = lexer.next_token()?;
        match token.kind() {
            TokenKind::Whitespace => whitespace = Some(token.text_str()),
            TokenKind::Key => {
                // The lexer only emits a key when a colon follows.
                let colon = lexer.next_token()?;
                debug_assert_eq!(colon.kind(), TokenKind::Colon);
                match items.last_mut() {
                    Some(previous) => {
                        previous.trailing = Cow::Borrowed(whitespace.take().unwrap_or(""))
                    }
                    None => whitespace = None,
                }
                let key = token.text_str();
                if items.iter().any(|item| item.key == key) {
                    return Err(ErrorKind::DuplicateKey);
                }
                if !capacity.admits(items.len()) {
                    return Err(ErrorKind::CapacityExceeded);
                }
                items.push(Item::new(Cow::Borrowed(key)));
            }
            TokenKind::Colon => return Err(ErrorKind::Grammar("unexpected ':'")),
            TokenKind::EndOfInput => {
                if let Some(last) = items.last_mut() {
                    last.trailing = Cow::Borrowed(whitespace.take().unwrap_or(""));
                }
                return Ok(items);
            }
            kind => {
                debug_assert!(kind.is_value());
                let Some(current) = items.last_mut() else {
                    return Err(ErrorKind::Grammar("value before first key"));
                };
                let run = whitespace.take().unwrap_or("");
                if current.tokens.is_empty() {
                    current.leading = Cow::Borrowed(run);
                }
                current.tokens.push(ValueToken {
                    kind,
                    text: Cow::Borrowed(token.text_str()),
                    separator: Cow::Borrowed(" "),
                });
            }
        }
    }
}
