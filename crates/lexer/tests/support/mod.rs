#![allow(dead_code)]

use lexer::{LexError, Lexer, Token, TokenKind};
use pretty_assertions::assert_eq;

/// Asserts kind and raw text of a single token.
pub fn assert_token(token: &Token<'_>, kind: TokenKind, text: &[u8]) {
    assert_eq!(token.kind(), kind);
    assert_eq!(token.text(), text);
}

pub fn assert_end_of_input(token: &Token<'_>) {
    assert_eq!(token.kind(), TokenKind::EndOfInput);
}

/// Lexes the whole span, panicking on the first error.
pub fn lex_all(source: &[u8]) -> Vec<(TokenKind, Vec<u8>)> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token().expect("lexing failed");
        if token.kind() == TokenKind::EndOfInput {
            return tokens;
        }
        tokens.push((token.kind(), token.text().to_vec()));
    }
}

/// Lexes until the span fails, panicking if it never does.
pub fn lex_error(source: &[u8]) -> LexError {
    let mut lexer = Lexer::new(source);
    loop {
        match lexer.next_token() {
            Ok(token) if token.kind() == TokenKind::EndOfInput => {
                panic!("expected a lex error, got none")
            }
            Ok(_) => {}
            Err(error) => return error,
        }
    }
}

pub fn is_grammar_error(error: &LexError) -> bool {
    matches!(error, LexError::Grammar { .. })
}

pub fn is_utf8_error(error: &LexError) -> bool {
    matches!(error, LexError::MalformedUtf8 { .. })
}
