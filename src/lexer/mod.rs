//! Logos-based lexer for file names.
//!
//! This module provides tokenization using the [logos](https://docs.rs/logos)
//! crate, which generates a fast lexer from regex patterns at compile time.
//! The only structure a file name has for sequence detection is the position
//! of its digit runs, so the lexer splits the name into digit and non-digit
//! runs and reports the digit runs with their byte spans.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
///
/// Represents a range of bytes in the original file name, used to recover
/// the literal text before and after a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A digit run found in a file name: a frame-number candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRun<'src> {
    /// Byte span of the run within the file name.
    pub span: Span,
    /// The raw digits, leading zeros included.
    pub raw: &'src str,
}

impl NumberRun<'_> {
    /// The parsed index value.
    ///
    /// Returns `None` when the run does not fit a `u32`; a run that long is
    /// not a plausible frame number and is skipped during grouping.
    pub fn value(&self) -> Option<u32> {
        self.raw.parse().ok()
    }

    /// Padding width of the run.
    ///
    /// Leading zeros make the width significant: `0998` has padding 4, while
    /// `1000` (no leading zero) has padding 0. A lone `0` also has padding 0.
    pub fn padding(&self) -> usize {
        if self.raw.len() > 1 && self.raw.starts_with('0') {
            self.raw.len()
        } else {
            0
        }
    }

    /// Number of digits in the run, regardless of padding.
    pub fn width(&self) -> usize {
        self.raw.len()
    }
}

/// Find every digit run in a file name, in left-to-right order.
pub fn number_runs(input: &str) -> Vec<NumberRun<'_>> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(token, range)| match token {
            Ok(Token::Digits(raw)) => Some(NumberRun {
                span: range.into(),
                raw,
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_with_spans() {
        let runs = number_runs("shotA.0001.exr");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].raw, "0001");
        assert_eq!(runs[0].span, Span::new(6, 10));
        assert_eq!(runs[0].value(), Some(1));
        assert_eq!(runs[0].padding(), 4);
    }

    #[test]
    fn unpadded_run_has_zero_padding() {
        let runs = number_runs("frame1000.dpx");
        assert_eq!(runs[0].padding(), 0);
        assert_eq!(runs[0].width(), 4);
        assert_eq!(runs[0].value(), Some(1000));
    }

    #[test]
    fn lone_zero_is_unpadded() {
        let runs = number_runs("take0.mov");
        assert_eq!(runs[0].padding(), 0);
        assert_eq!(runs[0].value(), Some(0));
    }

    #[test]
    fn overflowing_run_has_no_value() {
        let runs = number_runs("hash.99999999999999999999.bin");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].value(), None);
    }

    #[test]
    fn no_runs_in_plain_name() {
        assert!(number_runs("single.exr").is_empty());
    }

    #[test]
    fn unicode_literals_do_not_break_spans() {
        let runs = number_runs("plané.0002.exr");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].value(), Some(2));
    }
}
