//! String escape codec.
//!
//! The lexer has already checked escape shape (letters and hex digit
//! counts); this module decides whether the escaped code points are
//! scalar values and expands them.

use crate::error::ErrorKind;

/// Expands a lexed string token (quotes included) into its character
/// sequence. Escaped code points must be scalar values: surrogates and
/// anything above U+10FFFF fail with [`ErrorKind::Range`].
pub(crate) fn decode(token_text: &str) -> Result<String, ErrorKind> {
    let inner = view(token_text);
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
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('u') => out.push(escaped_code_point(&mut chars, 4)?),
            Some('U') => out.push(escaped_code_point(&mut chars, 8)?),
            _ => return Err(ErrorKind::Grammar("invalid escape sequence")),
        }
    }
    Ok(out)
}

fn escaped_code_point(chars: &mut std::str::Chars<'_>, digits: u32) -> Result<char, ErrorKind> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(ErrorKind::Grammar("truncated unicode escape"))?;
        value = value << 4 | digit;
    }
    char::from_u32(value).ok_or(ErrorKind::Range)
}

/// Quotes `text`, escaping only `"` and `\`. Returns the token and
/// whether any escape was emitted.
pub(crate) fn encode(text: &str) -> (String, bool) {
    let mut out = String::with_capacity(text.len() + 2);
    let mut escaped = false;
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
            escaped = true;
        }
        out.push(c);
    }
    out.push('"');
    (out, escaped)
}

/// Content of a token without the surrounding quotes.
pub(crate) fn view(token_text: &str) -> &str {
    &token_text[1..token_text.len() - 1]
}
