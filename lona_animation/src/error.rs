use thiserror::Error;

/// Result type alias for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Errors raised by frame sets and animated-sprite playback.
/// All of these are configuration or programming errors detected at the
/// boundary of the offending operation; none are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("frame index {index} is out of range (frame set holds {len} frames)")]
    FrameOutOfRange { index: usize, len: usize },

    #[error("no animation named '{0}'")]
    MissingAnimation(String),

    #[error("frame set must hold at least one frame")]
    EmptyFrameSet,

    #[error("frame set fps must be positive (got {fps})")]
    InvalidFps { fps: u32 },

    #[error("animated sprite needs at least one animation")]
    NoAnimations,
}
