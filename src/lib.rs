//! # frameseq
//!
//! Detect numbered file sequences and derive frame ranges.
//!
//! Given an unordered or mixed list of file names, this crate determines
//! whether they form one or more numbered sequences (collections), picks the
//! primary one, and derives its frame range. Frames-per-second is supplied by
//! the caller and passed through untouched; it is never derived from the
//! file names. The analysis is pure: no I/O, no hidden state, safe to call
//! from any number of threads.
//!
//! ## Quick Start
//!
//! ```
//! use frameseq::detect_frame_range;
//!
//! let files = ["shotA.0001.exr", "shotA.0002.exr", "shotA.0003.exr"];
//! let range = detect_frame_range(files, 24.0).expect("a sequence");
//!
//! assert_eq!(range.frame_start, 1);
//! assert_eq!(range.frame_end, 3);
//! assert_eq!((range.handle_start, range.handle_end), (0, 0));
//! assert_eq!(range.fps, 24.0);
//! ```
//!
//! ## Configurable Analysis
//!
//! ```
//! use frameseq::Analyzer;
//! use frameseq::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::builder()
//!     .extension_hint("exr")
//!     .build();
//!
//! let analyzer = Analyzer::new(config);
//! let (collections, remainder) =
//!     analyzer.assemble(["a.0001.exr", "a.0002.exr", "preview.mov"]);
//! assert_eq!(collections.len(), 1);
//! assert_eq!(remainder, vec!["preview.mov"]);
//! ```

pub mod config;
pub mod error;
pub mod model;

pub mod lexer;
mod assemble;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use model::{Collection, FileNameSet, FrameRange};

use config::AnalyzerConfig;
use tracing::debug;

/// Derive a frame range from a list of file names using default settings.
///
/// Returns `None` when the input is empty or no sequence is detected; that
/// is a normal outcome, not an error. For more control, use [`Analyzer`]
/// with a custom [`AnalyzerConfig`].
///
/// # Examples
///
/// ```
/// use frameseq::detect_frame_range;
///
/// assert!(detect_frame_range(["single.exr"], 24.0).is_none());
///
/// let range = detect_frame_range(["a.0001.exr", "a.0002.exr"], 25.0).unwrap();
/// assert_eq!((range.frame_start, range.frame_end), (1, 2));
/// ```
pub fn detect_frame_range<'a>(
    files: impl Into<FileNameSet<'a>>,
    fps: f64,
) -> Option<FrameRange> {
    Analyzer::default().detect_frame_range(files, fps)
}

/// Group file names into collections plus a remainder, with default settings.
///
/// Collections are emitted in detection order: the input position of each
/// collection's earliest member. The remainder holds every name that joined
/// no collection.
pub fn assemble<'a>(files: impl Into<FileNameSet<'a>>) -> (Vec<Collection>, Vec<String>) {
    Analyzer::default().assemble(files)
}

/// A configurable sequence analyzer.
///
/// Create an `Analyzer` with custom settings using [`AnalyzerConfig`]:
///
/// ```
/// use frameseq::Analyzer;
/// use frameseq::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .minimum_items(1)
///     .build();
///
/// let analyzer = Analyzer::new(config);
/// assert!(analyzer.detect_frame_range(["a.0007.exr"], 24.0).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Derive a frame range from a list of file names.
    ///
    /// The primary sequence is the first collection in detection order; any
    /// other collections in the same list are ignored. `frame_start` and
    /// `frame_end` are the lowest and highest detected indexes, handles are
    /// always zero, and `fps` is passed through unmodified.
    pub fn detect_frame_range<'a>(
        &self,
        files: impl Into<FileNameSet<'a>>,
        fps: f64,
    ) -> Option<FrameRange> {
        let files = files.into();
        if files.is_empty() {
            debug!("no file names supplied, nothing to analyze");
            return None;
        }
        let (collections, _) = assemble::assemble_with_config(&files, &self.config);
        let mut collections = collections.into_iter();
        let Some(primary) = collections.next() else {
            debug!(
                "no sequences detected in {} file name(s), skipping frame range",
                files.len()
            );
            return None;
        };
        let ignored = collections.count();
        if ignored > 0 {
            debug!("ignoring {ignored} additional sequence(s), first detected wins");
        }
        let frame_start = primary.first()?;
        let frame_end = primary.last()?;
        debug!(%primary, frame_start, frame_end, "derived frame range");
        Some(FrameRange::new(frame_start, frame_end, fps))
    }

    /// Group file names into collections plus a remainder.
    pub fn assemble<'a>(
        &self,
        files: impl Into<FileNameSet<'a>>,
    ) -> (Vec<Collection>, Vec<String>) {
        assemble::assemble_with_config(&files.into(), &self.config)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_sequence_yields_range() {
        let range = detect_frame_range(
            ["shotA.0001.exr", "shotA.0002.exr", "shotA.0003.exr"],
            24.0,
        )
        .expect("sequence detected");
        assert_eq!(range.frame_start, 1);
        assert_eq!(range.frame_end, 3);
        assert_eq!(range.handle_start, 0);
        assert_eq!(range.handle_end, 0);
        assert_eq!(range.fps, 24.0);
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(detect_frame_range(Vec::<String>::new(), 24.0).is_none());
    }

    #[test]
    fn no_numeric_run_yields_none() {
        assert!(detect_frame_range(["single.exr"], 24.0).is_none());
    }

    #[test]
    fn bare_string_equals_one_element_list() {
        let scalar = detect_frame_range("shotA.0001.exr", 24.0);
        let list = detect_frame_range(["shotA.0001.exr"], 24.0);
        assert_eq!(scalar, list);
    }

    #[test]
    fn interleaved_sequences_first_wins() {
        let range = detect_frame_range(
            [
                "shotA.0001.exr",
                "shotB.0010.exr",
                "shotA.0002.exr",
                "shotB.0011.exr",
            ],
            24.0,
        )
        .expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (1, 2));

        // Same names, the other sequence leading: the winner flips.
        let range = detect_frame_range(
            [
                "shotB.0010.exr",
                "shotA.0001.exr",
                "shotB.0011.exr",
                "shotA.0002.exr",
            ],
            24.0,
        )
        .expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (10, 11));
    }

    #[test]
    fn idempotent_for_identical_input() {
        let files = ["a.0001.exr", "a.0002.exr", "a.0005.exr"];
        let first = detect_frame_range(files, 24.0);
        let second = detect_frame_range(files, 24.0);
        assert_eq!(first, second);
    }

    #[test]
    fn gaps_are_not_rejected() {
        let range = detect_frame_range(["a.0001.exr", "a.0002.exr", "a.0005.exr"], 24.0)
            .expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (1, 5));
    }

    #[test]
    fn unsorted_input_still_orders_indexes() {
        let range = detect_frame_range(["a.0005.exr", "a.0001.exr", "a.0003.exr"], 24.0)
            .expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (1, 5));
    }

    #[test]
    fn fps_is_passed_through_unmodified() {
        let range =
            detect_frame_range(["a.0001.exr", "a.0002.exr"], 23.976).expect("sequence detected");
        assert_eq!(range.fps, 23.976);
    }

    #[test]
    fn padded_boundary_rollover() {
        let range = detect_frame_range(["a.0998.exr", "a.0999.exr", "a.1000.exr"], 24.0)
            .expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (998, 1000));
    }

    #[test]
    fn owned_string_inputs_work() {
        let files: Vec<String> = vec!["a.0001.exr".into(), "a.0002.exr".into()];
        let range = detect_frame_range(files, 24.0).expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (1, 2));
    }

    #[test]
    fn extension_hint_matching_nothing_yields_none() {
        let analyzer = Analyzer::new(AnalyzerConfig::builder().extension_hint("exr").build());
        assert!(analyzer
            .detect_frame_range(["a.0001.mov", "a.0002.mov"], 24.0)
            .is_none());
    }

    #[test]
    fn case_insensitive_analyzer_groups_across_casing() {
        let analyzer = Analyzer::new(AnalyzerConfig::builder().case_sensitive(false).build());
        let range = analyzer
            .detect_frame_range(["Shot.0001.EXR", "shot.0002.exr"], 24.0)
            .expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (1, 2));
    }

    #[test]
    fn default_analyzer_matches_free_function() {
        let files = ["a.0001.exr", "a.0002.exr"];
        assert_eq!(
            Analyzer::default().detect_frame_range(files, 24.0),
            detect_frame_range(files, 24.0)
        );
    }

    #[test]
    fn assemble_reports_collections_and_remainder() {
        let (collections, remainder) =
            assemble(["plate.0001.exr", "plate.0002.exr", "reference.mov"]);
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].to_string(), "plate.%04d.exr [1-2]");
        assert_eq!(remainder, vec!["reference.mov"]);
    }

    #[test]
    fn from_paths_feeds_the_analyzer() {
        let files =
            FileNameSet::from_paths(["a.0001.exr", "a.0002.exr"]).expect("utf-8 paths");
        let range = detect_frame_range(files, 24.0).expect("sequence detected");
        assert_eq!((range.frame_start, range.frame_end), (1, 2));
    }
}
