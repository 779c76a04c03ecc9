//! Moteur pseudographique de pixgrid.
//!
//! Converts binary bitmaps to Unicode block-character grids: the chunk
//! encoder, the seven builtin block-set tables, and the static registry.

pub mod encoder;
pub mod render;
pub mod sets;

pub use encoder::ChunkEncoder;
pub use render::{render, render_named};
