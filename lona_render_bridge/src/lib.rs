//! Bridge between the scene core and a host graphics API: the scene
//! emits retained draw commands into a `DrawList`; the host replays them
//! against its device. Nothing in here touches a GPU.

use lona_ids::{FontID, TextureID};
use lona_structs::{Color, Rect, Vector2};
use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("text draw requested but no font has been configured")]
    MissingFont,
}

/// Opaque texture handle with queryable native bounds. The pixel data
/// itself is owned by the host content system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub id: TextureID,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn new(id: TextureID, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    /// Textured rectangle. `source` is a sub-rectangle of the texture in
    /// pixels; `None` means the whole texture.
    Sprite {
        texture: TextureID,
        dest: Rect,
        source: Option<Rect>,
        tint: Color,
    },
    Text {
        font: FontID,
        position: Vector2,
        text: String,
        tint: Color,
    },
}

/// Ordered command buffer for one frame.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Moves all queued commands into `out`, leaving the list empty.
    pub fn drain(&mut self, out: &mut Vec<DrawCommand>) {
        out.append(&mut self.commands);
    }
}

/// Thin façade over the host render surface: viewport size, clear color,
/// the configured text font, and the coordinate-flip helper. The scene
/// treats world Y as up; surfaces put (0, 0) at the top-left.
#[derive(Debug, Clone)]
pub struct Renderer {
    width: u32,
    height: u32,
    clear_color: Color,
    font: Option<FontID>,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clear_color: Color::BLACK,
            font: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn font(&self) -> Option<FontID> {
        self.font
    }

    pub fn set_font(&mut self, font: FontID) {
        self.font = Some(font);
    }

    /// Starts a frame: a fresh draw list seeded with the surface clear.
    pub fn begin_frame(&self) -> DrawList {
        let mut frame = DrawList::new();
        frame.push(DrawCommand::Clear {
            color: self.clear_color,
        });
        frame
    }

    /// Maps a point from bottom-left-origin world space into the
    /// surface's top-left-origin space (and back — the flip is its own
    /// inverse): `y' = height - y`.
    pub fn y_coordinate_flip(&self, point: Vector2) -> Vector2 {
        Vector2::new(point.x, self.height as f32 - point.y)
    }

    /// Queues a text draw in the configured font, opaque white.
    pub fn write_text(&self, frame: &mut DrawList, position: Vector2, text: &str) -> Result<()> {
        let Some(font) = self.font else {
            return Err(RenderError::MissingFont);
        };
        frame.push(DrawCommand::Text {
            font,
            position,
            text: text.to_string(),
            tint: Color::WHITE,
        });
        Ok(())
    }
}
