//! Tables builtin des sept jeux de blocs nommés.
//! - Block Elements (U+2580..U+259F)
//! - Sextants Unicode 13.0 (Symbols for Legacy Computing)
//! - Octants Unicode 16.0 (Symbols for Legacy Computing Supplement)
//! - Braille Patterns (U+2800..U+28FF)

pub mod blocks;
pub mod braille;
pub mod octants;
pub mod sextants;

pub use blocks::{blocks_1x2, blocks_2x2, double_blocks, full_blocks};
pub use braille::braille_2x4;
pub use octants::blocks_2x4;
pub use sextants::blocks_2x3;
