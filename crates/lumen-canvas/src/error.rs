//! Error types for canvas construction and pixel access.

use std::error::Error;
use std::fmt;

use lumen_arena::ArenaError;

/// Errors arising from canvas construction or pixel access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// A pixel coordinate is outside the canvas.
    IndexOutOfRange {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Canvas width.
        width: usize,
        /// Canvas height.
        height: usize,
    },
    /// Attempted to construct a canvas with zero pixels.
    EmptyCanvas,
    /// `width * height` does not fit in `usize`.
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Drawing fill colors from the arena failed.
    Arena(ArenaError),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel ({x}, {y}) out of range: canvas is {width}x{height}"
                )
            }
            Self::EmptyCanvas => write!(f, "canvas must have at least one pixel"),
            Self::TooLarge { width, height } => {
                write!(f, "canvas {width}x{height} overflows the pixel count")
            }
            Self::Arena(e) => write!(f, "canvas fill failed: {e}"),
        }
    }
}

impl Error for CanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for CanvasError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
