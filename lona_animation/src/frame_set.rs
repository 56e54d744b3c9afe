use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};

/// One sprite-sheet grid coordinate: cell `column` of cell-row `row`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameCell {
    pub row: u32,
    pub column: u32,
}

impl FrameCell {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// One named animation clip: an ordered list of sheet cells, a loop flag
/// and a playback rate. Immutable after construction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FrameSet {
    frames: Vec<FrameCell>,
    looped: bool,
    fps: u32,
}

impl FrameSet {
    /// Builds a frame set, validating up front so playback can never
    /// divide by zero or spin on an empty clip.
    pub fn new(frames: Vec<FrameCell>, looped: bool, fps: u32) -> Result<Self> {
        if frames.is_empty() {
            return Err(AnimationError::EmptyFrameSet);
        }
        if fps == 0 {
            return Err(AnimationError::InvalidFps { fps });
        }
        Ok(Self { frames, looped, fps })
    }

    /// The sheet cell at `index`, or `FrameOutOfRange` past the end.
    pub fn frame(&self, index: usize) -> Result<FrameCell> {
        self.frames
            .get(index)
            .copied()
            .ok_or(AnimationError::FrameOutOfRange {
                index,
                len: self.frames.len(),
            })
    }

    pub fn frames(&self) -> &[FrameCell] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn looped(&self) -> bool {
        self.looped
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Fixed frame period. Positive by construction.
    pub fn seconds_per_frame(&self) -> f32 {
        1.0 / self.fps as f32
    }
}
