//! Detected file sequences.

use std::collections::BTreeSet;
use std::fmt;

/// A detected group of file names that differ only in an embedded index.
///
/// Every member shares the same literal prefix (`head`), suffix (`tail`) and
/// padding width; the members are represented by their integer indexes. The
/// index set is non-empty, unique, and iterates in ascending order.
///
/// # Example
/// ```
/// use frameseq::assemble;
///
/// let (collections, _) = assemble(["fx.0001.vdb", "fx.0002.vdb", "fx.0005.vdb"]);
/// let collection = &collections[0];
/// assert_eq!(collection.head(), "fx.");
/// assert_eq!(collection.tail(), ".vdb");
/// assert_eq!(collection.padding(), 4);
/// assert_eq!(collection.first(), Some(1));
/// assert_eq!(collection.last(), Some(5));
/// assert!(!collection.is_contiguous());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection {
    head: String,
    tail: String,
    padding: usize,
    indexes: BTreeSet<u32>,
}

impl Collection {
    pub(crate) fn new(head: String, tail: String, padding: usize, indexes: BTreeSet<u32>) -> Self {
        Self {
            head,
            tail,
            padding,
            indexes,
        }
    }

    /// Literal text before the index.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Literal text after the index, extension included.
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Numeric padding width; 0 means unpadded, variable-width indexes.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Number of distinct indexes in the collection.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Check if the collection has no indexes.
    ///
    /// Collections produced by assembly are never empty.
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Iterate over the indexes in ascending order.
    pub fn indexes(&self) -> impl Iterator<Item = u32> + '_ {
        self.indexes.iter().copied()
    }

    /// The lowest index, if any.
    pub fn first(&self) -> Option<u32> {
        self.indexes.iter().next().copied()
    }

    /// The highest index, if any.
    pub fn last(&self) -> Option<u32> {
        self.indexes.iter().next_back().copied()
    }

    /// Check whether an index belongs to the collection.
    pub fn contains(&self, index: u32) -> bool {
        self.indexes.contains(&index)
    }

    /// Indexes missing between `first` and `last`.
    ///
    /// Gaps are reported, never rejected: a sequence with holes still has a
    /// well-defined frame range.
    pub fn holes(&self) -> Vec<u32> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (first..=last)
                .filter(|i| !self.indexes.contains(i))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Check if the index set has no gaps.
    pub fn is_contiguous(&self) -> bool {
        self.holes().is_empty()
    }

    /// Render the file name for a given index, honoring the padding width.
    ///
    /// ```
    /// use frameseq::assemble;
    ///
    /// let (collections, _) = assemble(["plate.0001.exr", "plate.0002.exr"]);
    /// assert_eq!(collections[0].format_index(7), "plate.0007.exr");
    /// ```
    pub fn format_index(&self, index: u32) -> String {
        format!(
            "{}{:0width$}{}",
            self.head,
            index,
            self.tail,
            width = self.padding
        )
    }

    fn ranges(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut run: Option<(u32, u32)> = None;
        for index in self.indexes() {
            run = match run {
                Some((start, end)) if index == end + 1 => Some((start, index)),
                Some((start, end)) => {
                    parts.push(format_run(start, end));
                    parts.push(", ".into());
                    Some((index, index))
                }
                None => Some((index, index)),
            };
        }
        if let Some((start, end)) = run {
            parts.push(format_run(start, end));
        }
        parts.concat()
    }
}

fn format_run(start: u32, end: u32) -> String {
    if start == end {
        format!("{start}")
    } else {
        format!("{start}-{end}")
    }
}

impl fmt::Display for Collection {
    /// Renders the conventional sequence notation, e.g.
    /// `plate.%04d.exr [1-3, 5]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.padding > 0 {
            write!(
                f,
                "{}%0{}d{} [{}]",
                self.head,
                self.padding,
                self.tail,
                self.ranges()
            )
        } else {
            write!(f, "{}%d{} [{}]", self.head, self.tail, self.ranges())
        }
    }
}
