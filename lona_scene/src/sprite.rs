use indexmap::IndexMap;
use lona_animation::{Animator, FrameCell, FrameSet};
use lona_render_bridge::{DrawCommand, DrawList, Renderer, Texture};
use lona_structs::{Color, Rect, Timing, Vector2};

use crate::error::{Result, SceneError};

/// A drawable. Static and animated sprites share one update/render
/// surface so attachments can hold either without caring which.
#[derive(Clone, Debug)]
pub enum Sprite {
    Static(StaticSprite),
    Animated(AnimatedSprite),
}

impl Sprite {
    /// Drawn size: the full sprite size for a static sprite, one cell
    /// for an animated one.
    pub fn size(&self) -> Vector2 {
        match self {
            Sprite::Static(sprite) => sprite.size(),
            Sprite::Animated(sprite) => sprite.cell_size(),
        }
    }

    pub fn texture(&self) -> Texture {
        match self {
            Sprite::Static(sprite) => sprite.texture,
            Sprite::Animated(sprite) => sprite.texture,
        }
    }

    pub fn update(&mut self, time: &Timing) {
        match self {
            Sprite::Static(sprite) => sprite.update(time),
            Sprite::Animated(sprite) => sprite.update(time),
        }
    }

    pub fn render(
        &self,
        time: &Timing,
        renderer: &Renderer,
        frame: &mut DrawList,
        position: Vector2,
    ) {
        match self {
            Sprite::Static(sprite) => sprite.render(time, renderer, frame, position),
            Sprite::Animated(sprite) => sprite.render(time, renderer, frame, position),
        }
    }
}

impl From<StaticSprite> for Sprite {
    fn from(sprite: StaticSprite) -> Self {
        Sprite::Static(sprite)
    }
}

impl From<AnimatedSprite> for Sprite {
    fn from(sprite: AnimatedSprite) -> Self {
        Sprite::Animated(sprite)
    }
}

/// A static drawable: one texture stamped at a position.
#[derive(Clone, Copy, Debug)]
pub struct StaticSprite {
    pub texture: Texture,
    size: Vector2,
}

impl StaticSprite {
    /// Size defaults to the texture's native bounds.
    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            size: texture.size(),
        }
    }

    pub fn with_size(texture: Texture, size: Vector2) -> Result<Self> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(SceneError::InvalidSpriteSize {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self { texture, size })
    }

    pub fn size(&self) -> Vector2 {
        self.size
    }

    /// One full-texture quad at `position`, untinted.
    pub fn render(
        &self,
        _time: &Timing,
        _renderer: &Renderer,
        frame: &mut DrawList,
        position: Vector2,
    ) {
        frame.push(DrawCommand::Sprite {
            texture: self.texture.id,
            dest: Rect::from_position_size(position, self.size),
            source: None,
            tint: Color::WHITE,
        });
    }

    /// Nothing to do; present so callers can treat static and animated
    /// sprites uniformly.
    pub fn update(&mut self, _time: &Timing) {}
}

/// A sprite-sheet drawable: a clip table plus playback cursor selecting
/// which sheet cell to stamp each frame.
#[derive(Clone, Debug)]
pub struct AnimatedSprite {
    pub texture: Texture,
    cell_size: Vector2,
    animator: Animator,
}

impl AnimatedSprite {
    pub fn new(
        texture: Texture,
        cell_size: Vector2,
        animations: IndexMap<String, FrameSet>,
    ) -> Result<Self> {
        if cell_size.x <= 0.0 || cell_size.y <= 0.0 {
            return Err(SceneError::InvalidSpriteSize {
                width: cell_size.x,
                height: cell_size.y,
            });
        }
        Ok(Self {
            texture,
            cell_size,
            animator: Animator::new(animations)?,
        })
    }

    pub fn cell_size(&self) -> Vector2 {
        self.cell_size
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn active_animation(&self) -> &str {
        self.animator.active_name()
    }

    /// Switches clips; unknown names are rejected rather than leaving
    /// the cursor pointing at nothing.
    pub fn set_active_animation(&mut self, name: &str) -> Result<()> {
        self.animator.set_active(name)?;
        Ok(())
    }

    pub fn current_frame(&self) -> FrameCell {
        self.animator.current_frame()
    }

    /// The sheet sub-rectangle for the current frame.
    fn source_rect(&self) -> Rect {
        let frame = self.current_frame();
        Rect::new(
            frame.column as f32 * self.cell_size.x,
            frame.row as f32 * self.cell_size.y,
            self.cell_size.x,
            self.cell_size.y,
        )
    }

    /// One cell-sized quad at `position`, sourced from the current
    /// frame's sheet cell, untinted.
    pub fn render(
        &self,
        _time: &Timing,
        _renderer: &Renderer,
        frame: &mut DrawList,
        position: Vector2,
    ) {
        frame.push(DrawCommand::Sprite {
            texture: self.texture.id,
            dest: Rect::from_position_size(position, self.cell_size),
            source: Some(self.source_rect()),
            tint: Color::WHITE,
        });
    }

    /// Feeds frame time into the playback accumulator.
    pub fn update(&mut self, time: &Timing) {
        self.animator.update(time.delta);
    }
}
