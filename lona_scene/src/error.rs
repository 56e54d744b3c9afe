use lona_animation::AnimationError;
use lona_ids::{AttachmentID, NodeID};
use lona_render_bridge::RenderError;
use thiserror::Error;

/// Result type alias for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised at the boundary of scene operations. These are caller
/// mistakes (stale handles, bad configuration), surfaced immediately and
/// never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("node {0} does not exist in this scene")]
    UnknownNode(NodeID),

    #[error("attachment {0} does not exist in this scene")]
    UnknownAttachment(AttachmentID),

    #[error("nil attachment handle")]
    NilAttachment,

    #[error("sprite size must be positive (got {width} x {height})")]
    InvalidSpriteSize { width: f32, height: f32 },

    #[error(transparent)]
    Animation(#[from] AnimationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
