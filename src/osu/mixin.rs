//! Mixin types for attaching source spans to values.
//!
//! - `SourceRangeMixin` wraps a value with the byte range of the line it came from.
//! - `SourceRangeMixinExt` provides the conversions to build one from any value.

use std::ops::Range;

/// A generic wrapper that attaches a byte range of the source text to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRangeMixin<T> {
    /// Wrapped content value
    content: T,
    /// Start index in the source string (0-based, inclusive)
    start: usize,
    /// End index in the source string (0-based, exclusive)
    end: usize,
}

impl<T> SourceRangeMixin<T> {
    /// Instances a new `SourceRangeMixin`.
    pub const fn new(content: T, start: usize, end: usize) -> Self {
        Self {
            content,
            start,
            end,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the source span as a range.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Maps the content of the wrapper, keeping the span.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SourceRangeMixin<U> {
        SourceRangeMixin::new(f(self.content), self.start, self.end)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceRangeMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at indices [{}, {})",
            self.content, self.start, self.end
        )
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceRangeMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods to wrap any value into a [`SourceRangeMixin`].
pub trait SourceRangeMixinExt {
    /// Wraps the value with the given byte range.
    fn into_wrapper_range(self, range: Range<usize>) -> SourceRangeMixin<Self>
    where
        Self: Sized,
    {
        SourceRangeMixin::new(self, range.start, range.end)
    }
}

impl<T> SourceRangeMixinExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_span() {
        let wrapped = "bad line".into_wrapper_range(3..11);
        assert_eq!(wrapped.to_string(), "bad line at indices [3, 11)");
        assert_eq!(wrapped.range(), 3..11);
        assert_eq!(wrapped.map(str::len).into_content(), 8);
    }
}
