//! Types et structures partagés de pixgrid.
//!
//! This crate contains the bitmap, the output glyph grid, the block-set
//! identifiers, and the render options shared across the pixgrid workspace.

pub mod bitmap;
pub mod config;
pub mod error;
pub mod grid;

pub use bitmap::Bitmap;
pub use config::{BlockSet, RenderOptions};
pub use error::CoreError;
pub use grid::GlyphGrid;
