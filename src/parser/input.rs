use bytes::BytesMut;

/// Borrowed view over caller owned bytes with a forward only cursor.
///
/// The parser reads from the cursor and may stop before the end. Positions reported by
/// [`Span::range`] are positions in [`Input::source`].
///
/// [`Span::range`]: super::Span::range
#[derive(Clone, Copy, Debug)]
pub struct Input<'a> {
    bytes: &'a [u8],
    // INVARIANT: `pos <= bytes.len()`
    pos: usize,
}

impl<'a> Input<'a> {
    /// Create new [`Input`] with the cursor at the first byte.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Returns `true` if there is no unread byte left.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// Returns the cursor position.
    #[inline]
    pub const fn begin(&self) -> usize {
        self.pos
    }

    /// Returns the position one past the last byte.
    #[inline]
    pub const fn end(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Returns the whole wrapped slice, including bytes behind the cursor.
    #[inline]
    pub const fn source(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the unread bytes.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Returns bytes between the start of the source and the cursor.
    #[inline]
    pub fn advanced_slice(&self) -> &'a [u8] {
        &self.bytes[..self.pos]
    }

    /// Returns the byte under the cursor without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Advance the cursor by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `n` is larger than [`remaining`][Input::remaining].
    #[inline]
    pub fn advance(&mut self, n: usize) {
        assert!(
            n <= self.remaining(),
            "cannot advance past the end of input: {n} > {}",
            self.remaining()
        );
        self.pos += n;
    }

    /// Move the cursor to the end of the input.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.bytes.len();
    }
}

impl Iterator for Input<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Input<'_> {}

impl<'a> From<&'a [u8]> for Input<'a> {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Self::new(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    #[inline]
    fn from(value: &'a [u8; N]) -> Self {
        Self::new(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    #[inline]
    fn from(value: &'a Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl<'a> From<&'a BytesMut> for Input<'a> {
    #[inline]
    fn from(value: &'a BytesMut) -> Self {
        Self::new(value)
    }
}
