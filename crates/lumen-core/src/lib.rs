//! Core value types for the Lumen ray tracer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! homogeneous [`Tuple`], the RGB [`Color`], the tolerance comparator every
//! equality test is built on, and the operand error raised by vector-only
//! operations.
//!
//! Everything here is plain `Copy` data with non-allocating arithmetic.
//! Arena-backed construction lives in `lumen-arena`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod float;
pub mod tuple;

pub use color::Color;
pub use error::OperandError;
pub use float::{approx_eq, EPSILON};
pub use tuple::Tuple;
