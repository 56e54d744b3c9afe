//! Scene core: a flat-arena scenegraph where nodes carry position and
//! name, behavior hangs off nodes as attachments, and each frame fans
//! out update/render/gui/collision callbacks depth-first over the tree.

mod arena;
mod attachment;
mod error;
mod node;
mod scene;
mod sprite;

pub use arena::{AttachmentArena, NodeArena};
pub use attachment::{Attachment, AttachmentData, Operation, SpriteAttachment};
pub use error::{Result, SceneError};
pub use node::SceneNode;
pub use scene::Scene;
pub use sprite::{AnimatedSprite, Sprite, StaticSprite};
