//! The Lumen canvas: a fixed-size raster of colors.
//!
//! A [`Canvas`] owns a row-major pixel buffer sized exactly
//! `width * height`. Its initial fill is drawn from a
//! [`ColorArena`](lumen_arena::ColorArena) according to a [`CanvasFill`]
//! policy and copied by value, so the pixels never alias arena storage.
//!
//! Exporting a canvas (PPM or otherwise) and clamping channels to a
//! displayable range are left to the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod config;
pub mod error;

pub use canvas::Canvas;
pub use config::{CanvasConfig, CanvasFill};
pub use error::CanvasError;
