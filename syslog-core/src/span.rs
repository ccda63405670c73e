//! Byte spans handed to callbacks.
//!
//! A [`Span`] is a borrowed view of the bytes of one completed token. It
//! points either into the chunk passed to [`Parser::exec`] or into storage
//! owned by the parser (the carry buffer, or the head accumulator's spill
//! area) when the token crossed a chunk boundary or had to be unescaped.
//!
//! Spans are only ever lent to a callback for the duration of that call. The
//! callback signatures use a fresh lifetime per invocation, so a span cannot
//! be stored past the call; copy it with [`Span::to_vec`] if it is needed
//! afterward.
//!
//! [`Parser::exec`]: crate::Parser::exec

use std::fmt;
use std::ops::Deref;
use std::str::Utf8Error;

/// Where the bytes of a [`Span`] live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The chunk passed to the current `exec` call.
    Chunk,
    /// Parser-owned storage (carry buffer or head spill).
    Carry,
}

/// A non-owning view of a token's bytes.
///
/// `offset` is relative to the buffer named by `source`: an index into the
/// current chunk for [`Source::Chunk`], an index into parser-owned storage
/// for [`Source::Carry`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    bytes: &'a [u8],
    offset: usize,
    source: Source,
}

impl<'a> Span<'a> {
    /// Span over bytes of the current chunk starting at `offset`.
    #[inline]
    pub fn chunk(bytes: &'a [u8], offset: usize) -> Self {
        Self { bytes, offset, source: Source::Chunk }
    }

    /// Span over parser-owned bytes starting at `offset`.
    #[inline]
    pub fn carry(bytes: &'a [u8], offset: usize) -> Self {
        Self { bytes, offset, source: Source::Carry }
    }

    /// The bytes of the token.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of the first byte within the source buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn source(&self) -> Source {
        self.source
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True for the RFC 5424 NILVALUE, a lone `-`.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.bytes == b"-"
    }

    /// The bytes as UTF-8 text.
    pub fn as_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.bytes)
    }

    /// Copy the bytes out, for consumers that need them after the callback.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl Deref for Span<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for Span<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl PartialEq<[u8]> for Span<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Span<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.bytes == other.as_slice()
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("bytes", &String::from_utf8_lossy(self.bytes))
            .field("offset", &self.offset)
            .field("source", &self.source)
            .finish()
    }
}
