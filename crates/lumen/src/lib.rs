//! Lumen: the foundation layer of a ray tracer.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Lumen sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use lumen::prelude::*;
//! use lumen::arena::tuple_ops;
//!
//! let mut tuples = TupleArena::with_capacity(16);
//! let a = tuple_ops::make_vector(&mut tuples, 1.0, 2.0, 3.0).unwrap();
//! let b = tuple_ops::make_vector(&mut tuples, 2.0, 3.0, 4.0).unwrap();
//! let (a, b) = (tuples[a], tuples[b]);
//! let c = tuple_ops::cross(&mut tuples, a, b).unwrap();
//! assert!(tuples[c].approx_eq(&Tuple::vector(-1.0, 2.0, -1.0)));
//!
//! let mut colors = ColorArena::with_capacity(16);
//! let mut canvas = Canvas::new(&mut colors, 10, 20).unwrap();
//! canvas.write_pixel(2, 3, Color::new(1.0, 0.0, 0.0)).unwrap();
//! assert_eq!(canvas.pixel_at(2, 3).unwrap().red(), 1.0);
//! assert!(canvas.pixel_at(10, 0).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lumen-core` | `Tuple`, `Color`, tolerance comparison |
//! | [`arena`] | `lumen-arena` | Bump arenas, handles, arena-backed arithmetic |
//! | [`canvas`] | `lumen-canvas` | Row-major color raster |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value types and tolerance comparison (`lumen-core`).
pub use lumen_core as types;

/// Bump arenas and arena-backed arithmetic (`lumen-arena`).
///
/// The allocating operations live in [`arena::tuple_ops`] and
/// [`arena::color_ops`].
pub use lumen_arena as arena;

/// The color raster (`lumen-canvas`).
pub use lumen_canvas as canvas;

/// Common imports for typical Lumen usage.
///
/// ```rust
/// use lumen::prelude::*;
/// ```
pub mod prelude {
    // Values
    pub use lumen_core::{approx_eq, Color, Tuple, EPSILON};

    // Arenas
    pub use lumen_arena::{
        Arena, ArenaConfig, BoundaryPolicy, ColorArena, Handle, TupleArena,
    };

    // Canvas
    pub use lumen_canvas::{Canvas, CanvasConfig, CanvasFill};

    // Errors
    pub use lumen_arena::{ArenaError, OpError};
    pub use lumen_canvas::CanvasError;
    pub use lumen_core::OperandError;
}
