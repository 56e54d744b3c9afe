use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?;
                let g = u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?;
                let b = u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?;
                Ok(Self::new(r, g, b, 255))
            }
            8 => {
                let r = u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?;
                let g = u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?;
                let b = u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?;
                let a = u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err("Invalid hex color length, expected 6 or 8 hex digits".to_string()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
