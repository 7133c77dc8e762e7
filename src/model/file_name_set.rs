//! Input normalization for file-name lists.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::path::Path;

/// An ordered set of file names to analyze.
///
/// Callers hand the analyzer anything from a single bare string to a vector
/// of owned strings; all of it normalizes into a `FileNameSet` once, at the
/// boundary, so everything downstream works with one shape. Input order is
/// preserved because detection order depends on it.
///
/// # Example
/// ```
/// use frameseq::FileNameSet;
///
/// let single = FileNameSet::from("shotA.0001.exr");
/// assert_eq!(single.len(), 1);
///
/// let many = FileNameSet::from(vec!["a.0001.exr", "a.0002.exr"]);
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileNameSet<'a> {
    names: Vec<Cow<'a, str>>,
}

impl<'a> FileNameSet<'a> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of file names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the file names in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_ref())
    }

    /// Build a set from paths, using each path's full string form.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] when a path is not valid UTF-8; that
    /// is a caller contract violation and fails loudly rather than being
    /// silently dropped from the set.
    pub fn from_paths<I, P>(paths: I) -> Result<FileNameSet<'static>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut names = Vec::new();
        for path in paths {
            let path = path.as_ref();
            match path.to_str() {
                Some(s) => names.push(Cow::Owned(s.to_owned())),
                None => {
                    return Err(Error::invalid_input(format!(
                        "file name is not valid UTF-8: {}",
                        path.display()
                    )))
                }
            }
        }
        Ok(FileNameSet { names })
    }
}

impl<'a> From<&'a str> for FileNameSet<'a> {
    /// A single bare string behaves as a one-element list.
    fn from(name: &'a str) -> Self {
        Self {
            names: vec![Cow::Borrowed(name)],
        }
    }
}

impl From<String> for FileNameSet<'_> {
    fn from(name: String) -> Self {
        Self {
            names: vec![Cow::Owned(name)],
        }
    }
}

impl<'a> From<&'a [&'a str]> for FileNameSet<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        names.iter().copied().collect()
    }
}

impl<'a> From<Vec<&'a str>> for FileNameSet<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        names.into_iter().collect()
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for FileNameSet<'a> {
    fn from(names: [&'a str; N]) -> Self {
        names.into_iter().collect()
    }
}

impl<'a> From<&'a [String]> for FileNameSet<'a> {
    fn from(names: &'a [String]) -> Self {
        Self {
            names: names.iter().map(|n| Cow::Borrowed(n.as_str())).collect(),
        }
    }
}

impl From<Vec<String>> for FileNameSet<'_> {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for FileNameSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Cow::Borrowed).collect(),
        }
    }
}

impl FromIterator<String> for FileNameSet<'_> {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Cow::Owned).collect(),
        }
    }
}
