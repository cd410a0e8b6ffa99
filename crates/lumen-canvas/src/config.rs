//! Canvas construction parameters.

use lumen_core::Color;

/// How a new canvas's pixels are initialised.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CanvasFill {
    /// Every pixel black.
    #[default]
    Black,
    /// Every pixel the given color.
    Solid(Color),
    /// Pixel `i` in raster order gets `(i + 1, i + 1, i + 1)`.
    ///
    /// Draws one arena slot per pixel, so the arena must have at least
    /// `width * height` usable slots left.
    Gradient,
}

/// Dimensions and fill policy for a [`Canvas`](crate::Canvas).
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Initial pixel contents. Default: [`CanvasFill::Black`].
    pub fill: CanvasFill,
}

impl CanvasConfig {
    /// A black canvas of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            fill: CanvasFill::default(),
        }
    }

    /// Replace the fill policy.
    pub fn with_fill(mut self, fill: CanvasFill) -> Self {
        self.fill = fill;
        self
    }

    /// `width * height`, or `None` on overflow.
    pub fn pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}
