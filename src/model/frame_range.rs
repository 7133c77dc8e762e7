//! Frame-range output record.

/// Frame range derived from the primary detected sequence.
///
/// `fps` is passed through from the caller untouched; it is never derived
/// from the file names. Handles are extra buffer frames outside the nominal
/// range and are always zero here. With the `serde` feature enabled the
/// record serializes with the camelCase keys publishing pipelines expect
/// (`frameStart`, `frameEnd`, `handleStart`, `handleEnd`, `fps`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FrameRange {
    /// First frame of the sequence (the lowest detected index).
    pub frame_start: u32,
    /// Last frame of the sequence (the highest detected index).
    pub frame_end: u32,
    /// Leading handle count; always 0 in this context.
    pub handle_start: u32,
    /// Trailing handle count; always 0 in this context.
    pub handle_end: u32,
    /// Frames per second, as supplied by the caller.
    pub fps: f64,
}

impl FrameRange {
    pub(crate) fn new(frame_start: u32, frame_end: u32, fps: f64) -> Self {
        Self {
            frame_start,
            frame_end,
            handle_start: 0,
            handle_end: 0,
            fps,
        }
    }

    /// Number of frames in the nominal range, endpoints included.
    pub fn frame_count(&self) -> u64 {
        u64::from(self.frame_end - self.frame_start) + 1
    }
}

impl std::fmt::Display for FrameRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} @ {}fps", self.frame_start, self.frame_end, self.fps)
    }
}
