use super::{Affine, Bounds, Color};

/// Horizontal advance per character, as a fraction of the font size.
const ADVANCE_RATIO: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT_RATIO: f64 = 1.0;

/// A text label placed through an affine transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntity {
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub color: Color,
    transform: Affine,
}

impl TextEntity {
    pub fn new(text: impl Into<String>, font_family: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_family: font_family.into(),
            font_size,
            color: Color::default(),
            transform: Affine::identity(),
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub(crate) fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Untransformed layout box using fixed advance metrics.
    pub fn local_rect(&self) -> Bounds {
        let lines = self.text.lines().count().max(1);
        let columns = self
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Bounds::new(
            0.0,
            0.0,
            columns as f64 * ADVANCE_RATIO * self.font_size,
            lines as f64 * LINE_HEIGHT_RATIO * self.font_size,
        )
    }
}
