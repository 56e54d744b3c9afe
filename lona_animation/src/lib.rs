pub mod animator;
pub mod error;
pub mod frame_set;
pub mod playback;

pub use animator::Animator;
pub use error::{AnimationError, Result};
pub use frame_set::{FrameCell, FrameSet};
pub use playback::Playback;
