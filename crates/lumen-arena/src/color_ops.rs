//! Arena-backed color construction and arithmetic.
//!
//! No operation checks or clamps channel ranges.

use lumen_core::Color;

use crate::arena::ColorArena;
use crate::error::ArenaError;
use crate::handle::Handle;

/// Allocate a color from its channels.
pub fn make_color(
    arena: &mut ColorArena,
    r: f32,
    g: f32,
    b: f32,
) -> Result<Handle<Color>, ArenaError> {
    arena.alloc(Color::new(r, g, b))
}

/// Channel-wise `a + b`.
pub fn add(arena: &mut ColorArena, a: Color, b: Color) -> Result<Handle<Color>, ArenaError> {
    arena.alloc(a + b)
}

/// Channel-wise `a - b`.
pub fn subtract(arena: &mut ColorArena, a: Color, b: Color) -> Result<Handle<Color>, ArenaError> {
    arena.alloc(a - b)
}

/// Every channel multiplied by `factor`.
pub fn scale(arena: &mut ColorArena, c: Color, factor: f32) -> Result<Handle<Color>, ArenaError> {
    arena.alloc(c * factor)
}

/// Channel-wise product of two colors.
pub fn hadamard(arena: &mut ColorArena, a: Color, b: Color) -> Result<Handle<Color>, ArenaError> {
    arena.alloc(a.hadamard(b))
}
