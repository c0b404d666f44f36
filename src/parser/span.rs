use std::ops::Range;

/// The element completed by the last [`Parser::parse_until`] call.
///
/// `range` is always within the [`Input`] of that call. When the element started in an earlier
/// chunk, `range` only covers its tail and [`as_bytes`] returns the whole element reassembled
/// inside the parser.
///
/// Delimiters are never included: the span of `"HTTP/1.1 "` is `HTTP/1.1`.
///
/// A span borrows both the parser and the input, it must not outlive either of them.
///
/// [`Parser::parse_until`]: super::Parser::parse_until
/// [`Input`]: super::Input
/// [`as_bytes`]: Span::as_bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    range: Range<usize>,
    bytes: &'a [u8],
    buffered: bool,
}

impl<'a> Span<'a> {
    pub(crate) const fn empty(at: usize) -> Self {
        Self { range: at..at, bytes: &[], buffered: false }
    }

    pub(crate) const fn borrowed(range: Range<usize>, bytes: &'a [u8]) -> Self {
        Self { range, bytes, buffered: false }
    }

    pub(crate) const fn buffered(range: Range<usize>, bytes: &'a [u8]) -> Self {
        Self { range, bytes, buffered: true }
    }

    /// Returns the position range of this element in the current input.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the complete element bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns `true` if the element has no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the length of the complete element.
    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the element straddled a chunk boundary and was reassembled by the
    /// parser.
    #[inline]
    pub const fn is_buffered(&self) -> bool {
        self.buffered
    }
}

impl AsRef<[u8]> for Span<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
