//! The two document containers sharing one codec.
//!
//! [`Document`] copies parsed content into private storage and grows on
//! demand. [`DocumentView`] borrows parsed content from the caller's
//! span and holds at most `N` items; only its written tokens are owned.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::{
    cursor::Cursor,
    item::{Item, is_valid_key},
    parse::{Capacity, parse},
};

/// Items plus the capacity rule and the validity flag.
#[derive(Debug)]
struct RawDocument<'buf> {
    items: Vec<Item<'buf>>,
    capacity: Capacity,
    valid: bool,
}

impl<'buf> RawDocument<'buf> {
    fn empty(capacity: Capacity) -> Self {
        RawDocument { items: Vec::new(), capacity, valid: true }
    }

    fn parse_from(source: &'buf [u8], capacity: Capacity) -> Self {
        match parse(source, capacity) {
            Ok(items) => RawDocument { items, capacity, valid: true },
            Err(error) => {
                tracing::debug!(%error, "document rejected");
                RawDocument { items: Vec::new(), capacity, valid: false }
            }
        }
    }

    /// Index of `key`, creating a fresh item when the key is well-formed
    /// and the capacity admits one.
    fn locate(&mut self, key: &str) -> Option<usize> {
        if let Some(index) = self.items.iter().position(|item| item.key == key) {
            return Some(index);
        }
        if !is_valid_key(key) || !self.capacity.admits(self.items.len()) {
            return None;
        }
        self.items.push(Item::new(Cow::Owned(key.to_owned())));
        Some(self.items.len() - 1)
    }

    /// Serializes all items in ascending byte-wise key order. The result
    /// is empty or ends in a newline, and never carries a BOM.
    fn render(&self) -> String {
        let mut order: Vec<&Item<'buf>> = self.items.iter().collect();
        order.sort_by(|a, b| a.key.as_bytes().cmp(b.key.as_bytes()));
        let mut out = String::new();
        for item in order {
            item.render_into(&mut out);
        }
        out
    }
}

/// Owning document: parsed content is copied out of the source span.
///
/// A failed parse yields an *invalid* document that exposes no items;
/// indexing it still creates fresh items, and `dump` renders only those.
#[derive(Debug)]
pub struct Document {
    raw: RawDocument<'static>,
    index: FxHashMap<String, usize>,
}

impl Document {
    /// Empty, valid, unbounded document.
    pub fn new() -> Document {
        Document { raw: RawDocument::empty(Capacity::Unbounded), index: FxHashMap::default() }
    }

    /// Parses a byte span into an unbounded document.
    pub fn parse(source: impl AsRef<[u8]>) -> Document {
        Document::parse_bounded(source, 0)
    }

    /// Parses with an item budget; `max_items == 0` means unbounded.
    /// Exceeding the budget rejects the whole document.
    pub fn parse_bounded(source: impl AsRef<[u8]>, max_items: usize) -> Document {
        let capacity = if max_items == 0 { Capacity::Unbounded } else { Capacity::AtMost(max_items) };
        let parsed = RawDocument::parse_from(source.as_ref(), capacity);
        let items: Vec<Item<'static>> = parsed.items.into_iter().map(Item::into_owned).collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.key.clone().into_owned(), position))
            .collect();
        Document { raw: RawDocument { items, capacity, valid: parsed.valid }, index }
    }

    /// False when the document was built from a rejected parse.
    pub fn is_valid(&self) -> bool {
        self.raw.valid
    }

    /// Cursor over `key`, creating an empty item on first use. A key the
    /// grammar or the capacity refuses yields an invalid cursor whose
    /// operations are no-ops.
    pub fn item(&mut self, key: &str) -> Cursor<'_, 'static> {
        match self.locate(key) {
            Some(index) => Cursor::over(&mut self.raw.items[index]),
            None => Cursor::detached(),
        }
    }

    /// Like [`Document::item`] with the key given as raw bytes.
    pub fn item_bytes(&mut self, key: &[u8]) -> Cursor<'_, 'static> {
        match std::str::from_utf8(key) {
            Ok(text) => self.item(text),
            Err(_) => Cursor::detached(),
        }
    }

    /// Serializes the document; see [`DocumentView::dump`].
    pub fn dump(&self) -> String {
        self.raw.render()
    }

    fn locate(&mut self, key: &str) -> Option<usize> {
        if let Some(&index) = self.index.get(key) {
            return Some(index);
        }
        let index = self.raw.locate(key)?;
        self.index.insert(key.to_owned(), index);
        Some(index)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

/// Fixed-capacity document borrowing parsed content from the caller's
/// span, which must outlive it. Holds at most `N` items; `N == 0` holds
/// none at all.
#[derive(Debug)]
pub struct DocumentView<'buf, const N: usize> {
    raw: RawDocument<'buf>,
}

impl<'buf, const N: usize> DocumentView<'buf, N> {
    /// Empty, valid document.
    pub fn new() -> Self {
        DocumentView { raw: RawDocument::empty(Capacity::AtMost(N)) }
    }

    /// Parses a byte span without copying its content.
    pub fn parse(source: &'buf [u8]) -> Self {
        DocumentView { raw: RawDocument::parse_from(source, Capacity::AtMost(N)) }
    }

    /// False when the document was built from a rejected parse.
    pub fn is_valid(&self) -> bool {
        self.raw.valid
    }

    /// Cursor over `key`; see [`Document::item`].
    pub fn item(&mut self, key: &str) -> Cursor<'_, 'buf> {
        match self.raw.locate(key) {
            Some(index) => Cursor::over(&mut self.raw.items[index]),
            None => Cursor::detached(),
        }
    }

    /// Like [`DocumentView::item`] with the key given as raw bytes.
    pub fn item_bytes(&mut self, key: &[u8]) -> Cursor<'_, 'buf> {
        match std::str::from_utf8(key) {
            Ok(text) => self.item(text),
            Err(_) => Cursor::detached(),
        }
    }

    /// Serializes the document: items in ascending byte-wise key order,
    /// one newline-terminated line per item plus whatever whitespace the
    /// item preserved, LF endings, no BOM.
    pub fn dump(&self) -> String {
        self.raw.render()
    }
}

impl<const N: usize> Default for DocumentView<'_, N> {
    fn default() -> Self {
        DocumentView::new()
    }
}
