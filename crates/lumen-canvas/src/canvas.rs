//! Row-major color raster.

use lumen_arena::{ArenaError, ColorArena};
use lumen_core::Color;

use crate::config::{CanvasConfig, CanvasFill};
use crate::error::CanvasError;

/// A `width × height` grid of colors.
///
/// Pixel `(x, y)` lives at index `y * width + x`. The buffer is allocated
/// once at construction and never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a black canvas, drawing the fill color from `arena`.
    pub fn new(arena: &mut ColorArena, width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::with_config(arena, CanvasConfig::new(width, height))
    }

    /// Create a canvas with an explicit fill policy.
    ///
    /// Returns `Err(CanvasError::EmptyCanvas)` if either dimension is zero,
    /// `Err(CanvasError::TooLarge)` if the pixel count overflows, and
    /// `Err(CanvasError::Arena)` if the arena cannot supply the fill colors.
    /// A gradient fill that would not fit is refused before any slot is
    /// taken.
    pub fn with_config(arena: &mut ColorArena, config: CanvasConfig) -> Result<Self, CanvasError> {
        let CanvasConfig {
            width,
            height,
            fill,
        } = config;
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptyCanvas);
        }
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::TooLarge { width, height })?;

        let pixels = match fill {
            CanvasFill::Black => solid(arena, Color::BLACK, len)?,
            CanvasFill::Solid(color) => solid(arena, color, len)?,
            CanvasFill::Gradient => gradient(arena, len)?,
        };
        log::debug!("canvas {width}x{height} built with {fill:?} fill from arena {}", arena.id());

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always returns `false` — construction rejects empty canvases.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The color at column `x`, row `y`.
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<&Color, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(&self.pixels[idx])
    }

    /// Overwrite the color at column `x`, row `y`.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

/// One arena slot, copied to every pixel.
fn solid(arena: &mut ColorArena, color: Color, len: usize) -> Result<Vec<Color>, ArenaError> {
    let handle = arena.alloc(color)?;
    Ok(vec![arena[handle]; len])
}

/// One arena slot per pixel, `(i + 1)` on every channel.
fn gradient(arena: &mut ColorArena, len: usize) -> Result<Vec<Color>, ArenaError> {
    if arena.remaining() < len {
        return Err(ArenaError::Exhausted {
            capacity: arena.capacity(),
            allocated: arena.len(),
        });
    }
    let mut pixels = Vec::with_capacity(len);
    for i in 0..len {
        let v = (i + 1) as f32;
        let handle = arena.alloc(Color::new(v, v, v))?;
        pixels.push(arena[handle]);
    }
    Ok(pixels)
}
