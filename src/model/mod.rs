//! Data model types for sequence detection.
//!
//! This module contains the types flowing across the analyzer boundary:
//! the normalized input set, detected collections, and the frame-range
//! output record.

mod collection;
mod file_name_set;
mod frame_range;

pub use collection::Collection;
pub use file_name_set::FileNameSet;
pub use frame_range::FrameRange;
