mod support;

use lexer::{Lexer, TokenKind};
use support::{assert_end_of_input, assert_token, is_grammar_error, lex_error};

fn assert_string(source: &[u8], escaped: bool) {
    let mut lexer = Lexer::new(source);
    assert_token(&lexer.next_token().unwrap(), TokenKind::Str { escaped }, source);
    assert_end_of_input(&lexer.next_token().unwrap());
}

#[test]
fn test_empty_string() {
    assert_string(b"\"\"", false);
}

#[test]
fn test_plain_string() {
    assert_string(b"\"Hello!\"", false);
}

#[test]
fn test_string_keeps_quotes_in_token_text() {
    let mut lexer = Lexer::new(b"\"42\"");
    let token = lexer.next_token().unwrap();
    assert_token(&token, TokenKind::Str { escaped: false }, b"\"42\"");
}

#[test]
fn test_string_with_literal_whitespace() {
    assert_string(b"\" \t \n \r \r\n \"", false);
}

#[test]
fn test_string_with_character_escapes() {
    assert_string(br#""\" \\ \t \n \r""#, true);
}

#[test]
fn test_string_with_unicode_escapes() {
    assert_string(b"\"\\u1E9e\"", true);
    assert_string(b"\"\\U0010FFFF\"", true);
}

#[test]
fn test_multibyte_content() {
    assert_string("\"中文 Español 日本語\"".as_bytes(), false);
}

#[test]
fn test_unterminated_string() {
    assert!(is_grammar_error(&lex_error(b"\"hello")));
}

#[test]
fn test_unescaped_quote_terminates_early() {
    // `"""` lexes an empty string and then chokes on the third quote.
    assert!(is_grammar_error(&lex_error(b"\"\"\"")));
}

#[test]
fn test_lone_backslash_consumes_closing_quote() {
    assert!(is_grammar_error(&lex_error(b"\"\\\"")));
}

#[test]
fn test_invalid_escape_letters() {
    assert!(is_grammar_error(&lex_error(br#""\0""#)));
    assert!(is_grammar_error(&lex_error(br#""\f""#)));
    assert!(is_grammar_error(&lex_error(br#""\x42""#)));
}

#[test]
fn test_truncated_unicode_escape() {
    assert!(is_grammar_error(&lex_error(br#""\u123x""#)));
    assert!(is_grammar_error(&lex_error(br#""\U0001234x""#)));
}

#[test]
fn test_surrogate_escape_is_shape_valid() {
    // Range checking happens when the string is read, not here.
    assert_string(br#""\uD800""#, true);
}

#[test]
fn test_string_requires_trailing_whitespace() {
    assert!(is_grammar_error(&lex_error(b"\"A\"b:11")));
}
