//! KCV is a small, strict, UTF-8 key-colon-value text format: a flat
//! mapping from identifier keys to ordered runs of bounded integers,
//! finite floats, `yes`/`no` booleans and quoted strings.
//!
//! Failures never raise: a rejected parse yields an invalid [`Document`],
//! a rejected read or write parks the [`Cursor`] in its invalid state
//! and leaves everything else untouched.
//!
//! ```
//! let mut doc = kcv::Document::parse("speed:88 label:\"ok\"");
//! assert!(doc.is_valid());
//!
//! let mut speed = 0;
//! doc.item("speed").read(&mut speed);
//! assert_eq!(speed, 88);
//!
//! doc.item("tags").write("fast").write(42);
//! assert_eq!(doc.dump(), "label: \"ok\"\nspeed: 88\ntags: \"fast\" 42\n");
//! ```

mod cursor;
mod document;
mod error;
mod item;
mod parse;
mod string;
mod value;

pub use lexer::TokenKind;

pub use crate::{
    cursor::{Cursor, Fixed, General, Hex, ReadValue, WriteOp, WriteValue, Ws, fixed, general, hex, nl, sp, tab},
    document::{Document, DocumentView},
    value::Integer,
};
