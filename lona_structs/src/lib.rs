pub mod color;
pub mod rect;
pub mod timing;
pub mod vector2;

pub use color::Color;
pub use rect::Rect;
pub use timing::Timing;
pub use vector2::Vector2;
