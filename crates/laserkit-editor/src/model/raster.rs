use std::sync::Arc;

use image::RgbaImage;

use super::{Affine, Bounds};

/// A raster placed on the canvas through an affine transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntity {
    pixels: Arc<RgbaImage>,
    /// Scene units covered by one pixel.
    pub pixel_size: f64,
    transform: Affine,
}

impl ImageEntity {
    pub fn new(pixels: RgbaImage, pixel_size: f64) -> Self {
        Self {
            pixels: Arc::new(pixels),
            pixel_size,
            transform: Affine::identity(),
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub(crate) fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Untransformed rectangle `(0,0)-(w·px, h·px)`.
    pub fn local_rect(&self) -> Bounds {
        Bounds::new(
            0.0,
            0.0,
            self.pixels.width() as f64 * self.pixel_size,
            self.pixels.height() as f64 * self.pixel_size,
        )
    }
}
