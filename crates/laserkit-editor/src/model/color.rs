use serde::{Deserialize, Serialize};

/// RGBA color used for path strokes and text fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Laser layer colors, indexed by layer number.
const LAYER_PALETTE: [Color; 12] = [
    Color::rgb(0, 0, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 224, 0),
    Color::rgb(208, 208, 0),
    Color::rgb(255, 128, 0),
    Color::rgb(0, 224, 255),
    Color::rgb(255, 0, 255),
    Color::rgb(180, 180, 180),
    Color::rgb(0, 0, 160),
    Color::rgb(160, 0, 0),
    Color::rgb(0, 160, 0),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color assigned to a laser layer. Indices past the palette wrap around.
    pub fn layer(index: usize) -> Self {
        LAYER_PALETTE[index % LAYER_PALETTE.len()]
    }

    /// Number of distinct layer colors.
    pub fn layer_count() -> usize {
        LAYER_PALETTE.len()
    }

    /// Layer number whose palette entry matches this color, if any.
    pub fn layer_index(&self) -> Option<usize> {
        LAYER_PALETTE.iter().position(|c| c == self)
    }

    /// `#rrggbb` form, alpha omitted.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
