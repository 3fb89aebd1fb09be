use crate::lexer::Lexer;

impl<'src> Lexer<'src> {
    /// Byte at the current position, if any.
    #[inline]
    pub(super) fn peek(&self) -> Option<u8> {
        self.peek_by(0)
    }

    /// Byte at `offset` from the current position without advancing.
    #[inline]
    pub(super) fn peek_by(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub(super) fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Advance the cursor by `offset` bytes, saturating at the end.
    #[inline]
    pub(super) fn advance_by(&mut self, offset: usize) {
        self.position = (self.position + offset).min(self.source.len());
    }

    /// Advance while `pred` holds for the current byte.
    pub(super) fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.advance();
        }
    }

    /// Current byte offset in the source span.
    #[inline]
    pub(super) fn position(&self) -> usize {
        self.position
    }

    /// Bytes from `start` up to the current position.
    #[inline]
    pub(super) fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.source[start..self.position]
    }

    /// Remaining unlexed bytes.
    #[inline]
    pub(super) fn rest(&self) -> &'src [u8] {
        &self.source[self.position..]
    }
}
