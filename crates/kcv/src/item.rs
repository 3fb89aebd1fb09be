use std::borrow::Cow;

use lexer::TokenKind;

/// One value token: its classification, its raw text exactly as parsed
/// or produced, and the whitespace emitted before it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValueToken<'buf> {
    pub kind: TokenKind,
    pub text: Cow<'buf, str>,
    /// Separator before this token. Unused for the first token, whose
    /// whitespace lives in [`Item::leading`].
    pub separator: Cow<'buf, str>,
}

/// A key with its ordered value tokens and whitespace decoration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Item<'buf> {
    pub key: Cow<'buf, str>,
    /// Whitespace between the colon and the first value.
    pub leading: Cow<'buf, str>,
    pub tokens: Vec<ValueToken<'buf>>,
    /// Whitespace after the last value.
    pub trailing: Cow<'buf, str>,
}

impl<'buf> Item<'buf> {
    pub fn new(key: Cow<'buf, str>) -> Self {
        Item {
            key,
            leading: Cow::Borrowed(""),
            tokens: Vec::new(),
            trailing: Cow::Borrowed(""),
        }
    }

    /// Drops all values and whitespace, keeping the key.
    pub fn clear(&mut self) {
        self.leading = Cow::Borrowed("");
        self.tokens.clear();
        self.trailing = Cow::Borrowed("");
    }

    pub fn into_owned(self) -> Item<'static> {
        Item {
            key: Cow::Owned(self.key.into_owned()),
            leading: Cow::Owned(self.leading.into_owned()),
            tokens: self
                .tokens
                .into_iter()
                .map(|token| ValueToken {
                    kind: token.kind,
                    text: Cow::Owned(token.text.into_owned()),
                    separator: Cow::Owned(token.separator.into_owned()),
                })
                .collect(),
            trailing: Cow::Owned(self.trailing.into_owned()),
        }
    }

    /// Renders the item as one colon line.
    ///
    /// Childless items render as `key:`. Trailing whitespace survives up
    /// to and including its last newline; a run without a newline is
    /// replaced by one, so a rendered item always ends in `\n`.
    pub fn render_into(&self, out: &mut String) {
        out.push_str(&self.key);
        out.push(':');
        if self.tokens.is_empty() {
            out.push('\n');
            return;
        }
        if self.leading.is_empty() {
            out.push(' ');
        } else {
            out.push_str(&self.leading);
        }
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                out.push_str(&token.separator);
            }
            out.push_str(&token.text);
        }
        match self.trailing.rfind('\n') {
            Some(end) => out.push_str(&self.trailing[..=end]),
            None => out.push('\n'),
        }
    }
}

/// Key grammar: a letter followed by letters, digits, `-`, `.` or `_`.
pub(crate) fn is_valid_key(key: &str) -> bool {
    let mut bytes = key.bytes();
    match bytes.next() {
        Some(byte) if byte.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_'))
}
