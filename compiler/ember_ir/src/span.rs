//! Source location spans.

use std::fmt;
use std::ops::Range;

/// A byte range that does not fit in a [`Span`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    StartTooLarge(usize),
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(f, "span start {v} exceeds u32::MAX"),
            SpanError::EndTooLarge(v) => write!(f, "span end {v} exceeds u32::MAX"),
        }
    }
}

impl std::error::Error for SpanError {}

/// Byte offsets into the source, end exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Convert a byte range, failing for sources larger than 4 GiB.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Convert a byte range, saturating offsets that exceed `u32::MAX`.
    ///
    /// Diagnostics only need an approximate location, so lexing a huge file
    /// never fails on span arithmetic.
    pub fn from_range_saturating(range: Range<usize>) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Span { start: clamp(range.start), end: clamp(range.end) }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span { start: offset, end: offset }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    /// Move the span right by `delta` bytes.
    #[inline]
    #[must_use]
    pub fn shift(self, delta: u32) -> Span {
        Span { start: self.start.saturating_add(delta), end: self.end.saturating_add(delta) }
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(4, 9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::point(3).is_empty());
        assert_eq!(span.to_range(), 4..9);
    }

    #[test]
    fn test_span_merge_and_shift() {
        let merged = Span::new(10, 20).merge(Span::new(2, 12));
        assert_eq!(merged, Span::new(2, 20));
        assert_eq!(Span::new(1, 3).shift(10), Span::new(11, 13));
    }

    #[test]
    fn test_try_from_range_limits() {
        assert_eq!(Span::try_from_range(0..7), Ok(Span::new(0, 7)));

        let big = u32::MAX as usize + 1;
        assert_eq!(Span::try_from_range(big..big), Err(SpanError::StartTooLarge(big)));
        assert_eq!(Span::try_from_range(0..big), Err(SpanError::EndTooLarge(big)));
        assert_eq!(Span::from_range_saturating(0..big), Span::new(0, u32::MAX));
    }
}
