use std::borrow::Cow;

use lona_ids::{AttachmentID, NodeID};
use lona_structs::Vector2;

/// A positioned node in the world hierarchy. `position` is the node's
/// **center** in bottom-left-origin world space. Parent/child links and
/// the attachment list are ID handles into the scene's arenas; the
/// `Scene` is the only place that rewires them, which keeps the
/// owner/list relation consistent in both directions.
#[derive(Clone, Debug, Default)]
pub struct SceneNode {
    pub name: Cow<'static, str>,
    pub position: Vector2,
    pub(crate) parent: NodeID,
    pub(crate) children: Vec<NodeID>,
    pub(crate) attachments: Vec<AttachmentID>,
}

impl SceneNode {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            position: Vector2::zero(),
            parent: NodeID::nil(),
            children: Vec::new(),
            attachments: Vec::new(),
        }
    }

    pub fn at(name: impl Into<Cow<'static, str>>, position: Vector2) -> Self {
        let mut node = Self::new(name);
        node.position = position;
        node
    }

    /// Nil when this node is a root.
    pub fn parent(&self) -> NodeID {
        self.parent
    }

    /// Insertion order is child index order.
    pub fn children(&self) -> &[NodeID] {
        &self.children
    }

    pub fn attachments(&self) -> &[AttachmentID] {
        &self.attachments
    }
}
