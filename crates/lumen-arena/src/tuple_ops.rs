//! Arena-backed tuple construction and vector arithmetic.
//!
//! Every function takes its operands by value, computes the result with the
//! pure arithmetic on [`Tuple`], and allocates the result in the supplied
//! arena. Vector-only operations validate their operands first, so a
//! rejected operand never consumes a slot.
//!
//! [`magnitude`] and [`dot`] produce scalars and allocate nothing.

use lumen_core::{OperandError, Tuple};

use crate::arena::TupleArena;
use crate::error::{ArenaError, OpError};
use crate::handle::Handle;

/// Allocate a tuple from its four components.
pub fn make_tuple(
    arena: &mut TupleArena,
    x: f32,
    y: f32,
    z: f32,
    w: f32,
) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(Tuple::new(x, y, z, w))
}

/// Allocate a point (`w = 1`).
pub fn make_point(
    arena: &mut TupleArena,
    x: f32,
    y: f32,
    z: f32,
) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(Tuple::point(x, y, z))
}

/// Allocate a vector (`w = 0`).
pub fn make_vector(
    arena: &mut TupleArena,
    x: f32,
    y: f32,
    z: f32,
) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(Tuple::vector(x, y, z))
}

/// `a + b` over all four components.
pub fn add(arena: &mut TupleArena, a: Tuple, b: Tuple) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(a + b)
}

/// `a - b` over all four components.
pub fn subtract(arena: &mut TupleArena, a: Tuple, b: Tuple) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(a - b)
}

/// `-t` over all four components.
pub fn negate(arena: &mut TupleArena, t: Tuple) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(-t)
}

/// `t * scalar` over all four components.
pub fn scale(arena: &mut TupleArena, t: Tuple, scalar: f32) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(t * scalar)
}

/// `t * (1 / divisor)`. A zero divisor propagates infinities and NaN.
pub fn divide(
    arena: &mut TupleArena,
    t: Tuple,
    divisor: f32,
) -> Result<Handle<Tuple>, ArenaError> {
    arena.alloc(t / divisor)
}

/// Euclidean length of a vector.
pub fn magnitude(v: Tuple) -> Result<f32, OperandError> {
    v.magnitude()
}

/// Dot product of two vectors over all four components.
pub fn dot(a: Tuple, b: Tuple) -> Result<f32, OperandError> {
    a.dot(&b)
}

/// Allocate `v` scaled to unit length.
pub fn normalize(arena: &mut TupleArena, v: Tuple) -> Result<Handle<Tuple>, OpError> {
    let unit = v.normalize()?;
    Ok(arena.alloc(unit)?)
}

/// Allocate the cross product `a × b`. Swapping the operands negates it.
pub fn cross(arena: &mut TupleArena, a: Tuple, b: Tuple) -> Result<Handle<Tuple>, OpError> {
    let product = a.cross(&b)?;
    Ok(arena.alloc(product)?)
}

/// Allocate `v` reflected about the unit vector `normal`.
pub fn reflect(
    arena: &mut TupleArena,
    v: Tuple,
    normal: Tuple,
) -> Result<Handle<Tuple>, OpError> {
    let reflected = v.reflect(&normal)?;
    Ok(arena.alloc(reflected)?)
}
