use lona_ids::NodeID;
use lona_render_bridge::{DrawList, Renderer};
use lona_structs::{Timing, Vector2};

use crate::sprite::Sprite;

/// The per-frame operations an attachment can hook into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Update,
    Render,
    Gui,
    Collision,
}

/// A behavior unit bound to at most one scene node. `owner` is nil while
/// detached; only the `Scene` rewires it, so the owner pointer and the
/// node's attachment list never disagree.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub(crate) owner: NodeID,
    pub data: AttachmentData,
}

impl Attachment {
    pub(crate) fn new(data: AttachmentData) -> Self {
        Self {
            owner: NodeID::nil(),
            data,
        }
    }

    pub fn owner(&self) -> NodeID {
        self.owner
    }
}

/// The open set of attachment kinds. New behaviors (physics, audio
/// triggers, ...) slot in as further variants implementing whichever
/// callbacks they care about.
#[derive(Clone, Debug)]
pub enum AttachmentData {
    Sprite(SpriteAttachment),
}

impl AttachmentData {
    /// Advisory capability hint: whether this attachment does anything
    /// meaningful during `operation`. The fan-out invokes every
    /// attachment regardless; unsupported operations are no-ops.
    pub fn supports(&self, operation: Operation) -> bool {
        match self {
            AttachmentData::Sprite(sprite) => sprite.supports(operation),
        }
    }

    pub fn on_update(&mut self, time: &Timing) {
        match self {
            AttachmentData::Sprite(sprite) => sprite.on_update(time),
        }
    }

    pub fn on_render(
        &self,
        time: &Timing,
        renderer: &Renderer,
        frame: &mut DrawList,
        owner_position: Vector2,
    ) {
        match self {
            AttachmentData::Sprite(sprite) => {
                sprite.on_render(time, renderer, frame, owner_position)
            }
        }
    }

    pub fn on_gui(
        &self,
        time: &Timing,
        renderer: &Renderer,
        frame: &mut DrawList,
        owner_position: Vector2,
        owner_name: &str,
    ) -> lona_render_bridge::Result<()> {
        match self {
            AttachmentData::Sprite(sprite) => {
                sprite.on_gui(time, renderer, frame, owner_position, owner_name)
            }
        }
    }

    pub fn on_collision(&mut self, _time: &Timing, _collider: NodeID) {
        match self {
            // Sprites do not react to collisions.
            AttachmentData::Sprite(_) => {}
        }
    }
}

impl From<SpriteAttachment> for AttachmentData {
    fn from(attachment: SpriteAttachment) -> Self {
        AttachmentData::Sprite(attachment)
    }
}

/// Binds a sprite to a scene node: translates the node's center
/// position into surface space and delegates drawing and playback.
#[derive(Clone, Debug)]
pub struct SpriteAttachment {
    pub sprite: Sprite,
}

impl SpriteAttachment {
    pub fn new(sprite: impl Into<Sprite>) -> Self {
        Self {
            sprite: sprite.into(),
        }
    }

    pub fn supports(&self, operation: Operation) -> bool {
        matches!(operation, Operation::Update | Operation::Render)
    }

    pub fn on_update(&mut self, time: &Timing) {
        self.sprite.update(time);
    }

    /// The node position is the sprite's center: flip into surface
    /// space, then back off half the sprite size on both axes.
    pub fn on_render(
        &self,
        time: &Timing,
        renderer: &Renderer,
        frame: &mut DrawList,
        owner_position: Vector2,
    ) {
        let size = self.sprite.size();
        let mut position = renderer.y_coordinate_flip(owner_position);
        position.y -= size.y / 2.0;
        position.x -= size.x / 2.0;
        self.sprite.render(time, renderer, frame, position);
    }

    /// Draws the owner's name label. Recentered vertically only: the
    /// label's left edge sits on the node's X, unlike `on_render`.
    pub fn on_gui(
        &self,
        _time: &Timing,
        renderer: &Renderer,
        frame: &mut DrawList,
        owner_position: Vector2,
        owner_name: &str,
    ) -> lona_render_bridge::Result<()> {
        let mut position = renderer.y_coordinate_flip(owner_position);
        position.y -= self.sprite.size().y / 2.0;
        renderer.write_text(frame, position, owner_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lona_ids::{FontID, TextureID};
    use lona_render_bridge::{DrawCommand, Texture};
    use lona_structs::Rect;

    use crate::sprite::StaticSprite;

    fn attachment() -> SpriteAttachment {
        let texture = Texture::new(TextureID::from_parts(1, 0), 64, 96);
        SpriteAttachment::new(StaticSprite::new(texture))
    }

    #[test]
    fn sprite_attachment_supports_update_and_render_only() {
        let attachment = attachment();
        assert!(attachment.supports(Operation::Update));
        assert!(attachment.supports(Operation::Render));
        assert!(!attachment.supports(Operation::Gui));
        assert!(!attachment.supports(Operation::Collision));
    }

    #[test]
    fn render_flips_and_recenters_both_axes() {
        let renderer = Renderer::new(800, 600);
        let attachment = attachment();
        let mut frame = DrawList::new();
        attachment.on_render(
            &Timing::default(),
            &renderer,
            &mut frame,
            Vector2::new(200.0, 200.0),
        );
        // Flip: (200, 600 - 200) = (200, 400); recenter: (200-32, 400-48).
        assert_eq!(
            frame.commands(),
            &[DrawCommand::Sprite {
                texture: TextureID::from_parts(1, 0),
                dest: Rect::new(168.0, 352.0, 64.0, 96.0),
                source: None,
                tint: lona_structs::Color::WHITE,
            }]
        );
    }

    #[test]
    fn gui_recenters_vertically_only() {
        let mut renderer = Renderer::new(800, 600);
        renderer.set_font(FontID::from_parts(1, 0));
        let attachment = attachment();
        let mut frame = DrawList::new();
        attachment
            .on_gui(
                &Timing::default(),
                &renderer,
                &mut frame,
                Vector2::new(200.0, 200.0),
                "player",
            )
            .unwrap();
        // Flip to (200, 400), then only the vertical half-height offset.
        assert!(matches!(
            &frame.commands()[0],
            DrawCommand::Text { position, text, .. }
            if *position == Vector2::new(200.0, 352.0) && text == "player"
        ));
    }

    #[test]
    fn gui_without_font_fails() {
        let renderer = Renderer::new(800, 600);
        let attachment = attachment();
        let mut frame = DrawList::new();
        let err = attachment
            .on_gui(
                &Timing::default(),
                &renderer,
                &mut frame,
                Vector2::zero(),
                "player",
            )
            .unwrap_err();
        assert_eq!(err, lona_render_bridge::RenderError::MissingFont);
    }
}
