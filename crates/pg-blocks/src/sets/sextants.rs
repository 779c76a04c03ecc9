//! Jeu BLOCKS_2X3 : sextants Unicode 13.0 (Symbols for Legacy Computing).
//!
//! Rangs (row-major) :
//! +---+---+
//! | 0 | 1 |
//! +---+---+
//! | 2 | 3 |
//! +---+---+
//! | 4 | 5 |
//! +---+---+

use pg_core::error::CoreError;

use crate::encoder::ChunkEncoder;

/// Les 64 combinaisons, indexées par la valeur packée du chunk.
/// La plage U+1FB00..U+1FB3B ne couvre pas tout : 0 et 63 sont l'espace
/// et le bloc plein, les colonnes pleines 21 et 42 sont unifiées avec les
/// demi-blocs ▌ et ▐.
const GLYPHS: &str =
    " 🬀🬁🬂🬃🬄🬅🬆🬇🬈🬉🬊🬋🬌🬍🬎🬏🬐🬑🬒🬓▌🬔🬕🬖🬗🬘🬙🬚🬛🬜🬝🬞🬟🬠🬡🬢🬣🬤🬥🬦🬧▐🬨🬩🬪🬫🬬🬭🬮🬯🬰🬱🬲🬳🬴🬵🬶🬷🬸🬹🬺🬻█";

const ORDER: &[&[u8]] = &[&[0, 1], &[2, 3], &[4, 5]];

/// BLOCKS_2X3 : chunks de 3 lignes × 2 colonnes.
///
/// # Errors
/// Voir [`ChunkEncoder::new`].
pub fn blocks_2x3() -> Result<ChunkEncoder, CoreError> {
    ChunkEncoder::from_chars(GLYPHS, ORDER)
}
