//! Fixed-capacity bump arenas for Lumen geometry and colors.
//!
//! An [`Arena`] owns a buffer of exactly `capacity` slots, allocated once at
//! construction. Allocation copies a value into the next free slot and hands
//! back a typed [`Handle`]. Nothing is ever freed, reused or moved, so every
//! handle stays valid for the arena's whole lifetime.
//!
//! ```text
//! Arena<T>
//! ├── data: Vec<T>    (capacity slots, default-initialised)
//! ├── cursor          (next free slot == number allocated)
//! ├── ArenaId         (process-unique, stamped into every Handle)
//! └── ArenaConfig     (capacity + BoundaryPolicy)
//! ```
//!
//! The [`tuple_ops`] and [`color_ops`] modules layer the ray tracer's
//! arithmetic on top: each operation computes its result from value operands
//! and allocates it in the supplied arena.
//!
//! # Concurrency
//!
//! Allocation takes `&mut self`. Concurrent producers are ruled out by the
//! borrow checker rather than by a lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod color_ops;
pub mod config;
pub mod error;
pub mod handle;
pub mod tuple_ops;

// Public re-exports for the primary API surface.
pub use arena::{Arena, ColorArena, TupleArena};
pub use config::{ArenaConfig, BoundaryPolicy};
pub use error::{ArenaError, OpError};
pub use handle::{ArenaId, Handle};
