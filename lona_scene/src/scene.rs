use log::warn;
use lona_ids::{AttachmentID, NodeID};
use lona_render_bridge::{DrawList, Renderer};
use lona_structs::Timing;

use crate::arena::{AttachmentArena, NodeArena};
use crate::attachment::{Attachment, AttachmentData, Operation};
use crate::error::{Result, SceneError};
use crate::node::SceneNode;

/// The world: flat arenas of nodes and attachments plus the rewiring
/// operations that keep their cross-references consistent. All structural
/// edits go through here, so a node's `children`/`attachments` lists and
/// the back-pointers they mirror can never disagree.
#[derive(Default)]
pub struct Scene {
    nodes: NodeArena,
    attachments: AttachmentArena,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    // --- nodes ---------------------------------------------------------

    /// Inserts a parentless node.
    pub fn add_node(&mut self, node: SceneNode) -> NodeID {
        self.nodes.insert(node)
    }

    /// Inserts a node already wired under `parent`.
    pub fn spawn_child(&mut self, parent: NodeID, node: SceneNode) -> Result<NodeID> {
        if !self.nodes.contains(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let id = self.nodes.insert(node);
        // Both ends exist; set_parent cannot fail here.
        self.set_parent(id, parent)?;
        Ok(id)
    }

    pub fn node(&self, id: NodeID) -> Result<&SceneNode> {
        self.nodes.get(id).ok_or(SceneError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeID) -> Result<&mut SceneNode> {
        self.nodes.get_mut(id).ok_or(SceneError::UnknownNode(id))
    }

    /// Removes a node: detaches it from its parent, removes its
    /// attachments from the arena, and orphans its children (they become
    /// roots; recursive teardown is the caller's call to make).
    pub fn remove_node(&mut self, id: NodeID) -> Result<SceneNode> {
        if !self.nodes.contains(id) {
            return Err(SceneError::UnknownNode(id));
        }
        self.detach_from_parent(id);

        let node = self
            .nodes
            .remove(id)
            .ok_or(SceneError::UnknownNode(id))?;
        for &attachment in &node.attachments {
            self.attachments.remove(attachment);
        }
        for &child in &node.children {
            if let Some(child_node) = self.nodes.get_mut(child) {
                child_node.parent = NodeID::nil();
            }
        }
        Ok(node)
    }

    /// Moves `child` under `new_parent` (nil detaches it into a root).
    /// The child leaves its old parent's list and joins the end of the
    /// new one, so its ID lives in at most one children list at a time.
    ///
    /// No cycle detection: assigning a node's own descendant as its
    /// parent is on the caller.
    pub fn set_parent(&mut self, child: NodeID, new_parent: NodeID) -> Result<()> {
        if !self.nodes.contains(child) {
            return Err(SceneError::UnknownNode(child));
        }
        if !new_parent.is_nil() && !self.nodes.contains(new_parent) {
            return Err(SceneError::UnknownNode(new_parent));
        }

        self.detach_from_parent(child);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = new_parent;
        }
        if let Some(parent) = self.nodes.get_mut(new_parent) {
            parent.children.push(child);
        }
        Ok(())
    }

    /// Walks parent links to the top of `id`'s tree.
    pub fn root_of(&self, id: NodeID) -> Result<NodeID> {
        let mut current = id;
        loop {
            let node = self.node(current)?;
            if node.parent.is_nil() {
                return Ok(current);
            }
            current = node.parent;
        }
    }

    fn detach_from_parent(&mut self, child: NodeID) {
        let Some(parent) = self.nodes.get(child).map(|node| node.parent) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|&c| c != child);
        }
    }

    // --- attachments ---------------------------------------------------

    /// Inserts an attachment owned by `owner` (nil = start detached).
    pub fn add_attachment(
        &mut self,
        data: impl Into<AttachmentData>,
        owner: NodeID,
    ) -> Result<AttachmentID> {
        if !owner.is_nil() && !self.nodes.contains(owner) {
            return Err(SceneError::UnknownNode(owner));
        }
        let id = self.attachments.insert(Attachment::new(data.into()));
        self.set_attachment_owner(id, owner)?;
        Ok(id)
    }

    pub fn attachment(&self, id: AttachmentID) -> Result<&Attachment> {
        if id.is_nil() {
            return Err(SceneError::NilAttachment);
        }
        self.attachments
            .get(id)
            .ok_or(SceneError::UnknownAttachment(id))
    }

    pub fn attachment_mut(&mut self, id: AttachmentID) -> Result<&mut Attachment> {
        if id.is_nil() {
            return Err(SceneError::NilAttachment);
        }
        self.attachments
            .get_mut(id)
            .ok_or(SceneError::UnknownAttachment(id))
    }

    /// Rebinds an attachment: leave the old owner's list, set the owner
    /// pointer, join the new owner's list. Nil detaches without
    /// re-attaching. An attachment is never in two lists at once.
    pub fn set_attachment_owner(&mut self, id: AttachmentID, owner: NodeID) -> Result<()> {
        if id.is_nil() {
            return Err(SceneError::NilAttachment);
        }
        if !self.attachments.contains(id) {
            return Err(SceneError::UnknownAttachment(id));
        }
        if !owner.is_nil() && !self.nodes.contains(owner) {
            return Err(SceneError::UnknownNode(owner));
        }

        let old_owner = self
            .attachments
            .get(id)
            .map(|attachment| attachment.owner)
            .unwrap_or_default();
        if let Some(old) = self.nodes.get_mut(old_owner) {
            old.attachments.retain(|&a| a != id);
        }
        if let Some(attachment) = self.attachments.get_mut(id) {
            attachment.owner = owner;
        }
        if let Some(new) = self.nodes.get_mut(owner) {
            new.attachments.push(id);
        }
        Ok(())
    }

    /// Removes an attachment from the arena and its owner's list.
    pub fn remove_attachment(&mut self, id: AttachmentID) -> Result<Attachment> {
        self.set_attachment_owner(id, NodeID::nil())?;
        self.attachments
            .remove(id)
            .ok_or(SceneError::UnknownAttachment(id))
    }

    /// The node's attachments whose `supports(operation)` holds.
    /// Advisory metadata: the fan-out below invokes every attachment
    /// regardless, and unsupported callbacks are no-ops.
    pub fn find_attachments_supporting(
        &self,
        node: NodeID,
        operation: Operation,
    ) -> Result<Vec<AttachmentID>> {
        let node = self.node(node)?;
        Ok(node
            .attachments
            .iter()
            .copied()
            .filter(|&id| {
                self.attachments
                    .get(id)
                    .is_some_and(|attachment| attachment.data.supports(operation))
            })
            .collect())
    }

    // --- per-frame fan-out ---------------------------------------------
    //
    // Depth-first, attachments before children, insertion order. The
    // mutating walks snapshot each ID list before running callbacks, so a
    // callback that rewires the graph never invalidates the active
    // iteration; IDs that go stale mid-walk are skipped with a warning.

    /// Ticks every attachment under `root`.
    pub fn update(&mut self, root: NodeID, time: &Timing) {
        let Some((attachments, children)) = self.snapshot(root) else {
            warn!("update: skipping stale node {root}");
            return;
        };
        for id in attachments {
            match self.attachments.get_mut(id) {
                Some(attachment) => attachment.data.on_update(time),
                None => warn!("update: skipping stale attachment {id}"),
            }
        }
        for child in children {
            self.update(child, time);
        }
    }

    /// Queues draw commands for every attachment under `root`.
    pub fn render(&self, root: NodeID, time: &Timing, renderer: &Renderer, frame: &mut DrawList) {
        let Some(node) = self.nodes.get(root) else {
            warn!("render: skipping stale node {root}");
            return;
        };
        for &id in &node.attachments {
            match self.attachments.get(id) {
                Some(attachment) => {
                    attachment
                        .data
                        .on_render(time, renderer, frame, node.position)
                }
                None => warn!("render: skipping stale attachment {id}"),
            }
        }
        for &child in &node.children {
            self.render(child, time, renderer, frame);
        }
    }

    /// Queues overlay text for every attachment under `root`. Fails fast
    /// on the first text draw the renderer rejects.
    pub fn gui(
        &self,
        root: NodeID,
        time: &Timing,
        renderer: &Renderer,
        frame: &mut DrawList,
    ) -> Result<()> {
        let Some(node) = self.nodes.get(root) else {
            warn!("gui: skipping stale node {root}");
            return Ok(());
        };
        for &id in &node.attachments {
            match self.attachments.get(id) {
                Some(attachment) => {
                    attachment
                        .data
                        .on_gui(time, renderer, frame, node.position, &node.name)?
                }
                None => warn!("gui: skipping stale attachment {id}"),
            }
        }
        for &child in &node.children {
            self.gui(child, time, renderer, frame)?;
        }
        Ok(())
    }

    /// Tells `node`'s attachments that `collider` touched it. Local to
    /// the node: no recursion into children; propagating to a subtree is
    /// the caller's concern.
    pub fn notify_collision(&mut self, node: NodeID, time: &Timing, collider: NodeID) {
        let Some((attachments, _)) = self.snapshot(node) else {
            warn!("notify_collision: skipping stale node {node}");
            return;
        };
        for id in attachments {
            match self.attachments.get_mut(id) {
                Some(attachment) => attachment.data.on_collision(time, collider),
                None => warn!("notify_collision: skipping stale attachment {id}"),
            }
        }
    }

    fn snapshot(&self, node: NodeID) -> Option<(Vec<AttachmentID>, Vec<NodeID>)> {
        self.nodes
            .get(node)
            .map(|node| (node.attachments.clone(), node.children.clone()))
    }
}
