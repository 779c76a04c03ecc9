//! Jeux Block Elements (U+2580..U+259F) : chunks 1×1, 2×1 et 2×2.

use pg_core::error::CoreError;

use crate::encoder::ChunkEncoder;

/// Ordre 1×1 partagé par DOUBLE_BLOCKS et FULL_BLOCKS.
const SINGLE: &[&[u8]] = &[&[0]];

/// DOUBLE_BLOCKS : chaque pixel devient deux colonnes (`██` ou deux
/// espaces), l'aspect approche 1:1 dans une police terminal.
///
/// # Errors
/// Voir [`ChunkEncoder::new`].
pub fn double_blocks() -> Result<ChunkEncoder, CoreError> {
    ChunkEncoder::new(&["  ", "██"], SINGLE)
}

/// FULL_BLOCKS : un caractère par pixel.
///
/// # Errors
/// Voir [`ChunkEncoder::new`].
pub fn full_blocks() -> Result<ChunkEncoder, CoreError> {
    ChunkEncoder::from_chars(" █", SINGLE)
}

/// BLOCKS_1X2 : demi-blocs, deux pixels par colonne.
///
/// Rangs :
/// +---+
/// | 0 |
/// +---+
/// | 1 |
/// +---+
///
/// # Errors
/// Voir [`ChunkEncoder::new`].
pub fn blocks_1x2() -> Result<ChunkEncoder, CoreError> {
    ChunkEncoder::from_chars(" ▀▄█", &[&[0], &[1]])
}

/// BLOCKS_2X2 : quadrants, 16 combinaisons.
///
/// Rangs (row-major) :
/// +---+---+
/// | 0 | 1 |
/// +---+---+
/// | 2 | 3 |
/// +---+---+
///
/// # Errors
/// Voir [`ChunkEncoder::new`].
pub fn blocks_2x2() -> Result<ChunkEncoder, CoreError> {
    ChunkEncoder::from_chars(" ▘▝▀▖▌▞▛▗▚▐▜▄▙▟█", &[&[0, 1], &[2, 3]])
}

#[cfg(test)]
mod tests {
    use pg_core::bitmap::Bitmap;

    use super::*;

    #[test]
    fn shapes_and_palette_sizes() {
        let double = double_blocks().unwrap();
        assert_eq!((double.chunk_width(), double.chunk_height()), (1, 1));
        assert_eq!(double.palette_len(), 2);

        let half = blocks_1x2().unwrap();
        assert_eq!((half.chunk_width(), half.chunk_height()), (1, 2));
        assert_eq!(half.palette_len(), 4);

        let quadrant = blocks_2x2().unwrap();
        assert_eq!((quadrant.chunk_width(), quadrant.chunk_height()), (2, 2));
        assert_eq!(quadrant.palette_len(), 16);
    }

    #[test]
    fn quadrant_corners() {
        let encoder = blocks_2x2().unwrap();
        let top_left = Bitmap::from_rows(&[vec![1, 0], vec![0, 0]]).unwrap();
        assert_eq!(encoder.encode(&top_left).to_text(), "▘");
        let bottom_right = Bitmap::from_rows(&[vec![0, 0], vec![0, 1]]).unwrap();
        assert_eq!(encoder.encode(&bottom_right).to_text(), "▗");
        let diagonal = Bitmap::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(encoder.encode(&diagonal).to_text(), "▚");
    }
}
