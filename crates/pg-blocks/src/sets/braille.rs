//! Jeu BRAILLE_2X4 : motifs braille U+2800..U+28FF.
//!
//! Le bloc braille est mappé bit à bit sur l'offset U+2800, dans l'ordre
//! historique des points 1 à 8 (colonne-major, points 7 et 8 en bas) :
//!
//! Rangs :
//! +---+---+
//! | 0 | 3 |
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 6 | 7 |
//! +---+---+

use pg_core::error::CoreError;

use crate::encoder::ChunkEncoder;

/// Premier point de code du bloc braille.
const BRAILLE_BASE: u32 = 0x2800;

const ORDER: &[&[u8]] = &[&[0, 3], &[1, 4], &[2, 5], &[6, 7]];

/// BRAILLE_2X4 : palette générée, `U+2800 + index` pour chaque index.
///
/// # Errors
/// Voir [`ChunkEncoder::new`].
pub fn braille_2x4() -> Result<ChunkEncoder, CoreError> {
    let glyphs: String = (0..256_u32)
        .map(|offset| char::from_u32(BRAILLE_BASE + offset).unwrap_or(' '))
        .collect();
    ChunkEncoder::from_chars(&glyphs, ORDER)
}
