//! Registre statique des encodeurs et rendu par jeu de blocs.

use std::sync::LazyLock;

use pg_core::bitmap::Bitmap;
use pg_core::config::BlockSet;
use pg_core::error::CoreError;

use crate::encoder::ChunkEncoder;
use crate::sets;

/// Encodeurs des sept jeux, construits au premier accès, indexés par le
/// discriminant de [`BlockSet`].
static ENCODERS: LazyLock<[ChunkEncoder; 7]> = LazyLock::new(|| BlockSet::ALL.map(build));

/// Construit l'encodeur d'un jeu depuis ses tables builtin. Un échec ici
/// est un bug des tables, couvert par les tests des sous-modules `sets`.
#[allow(clippy::expect_used)]
fn build(set: BlockSet) -> ChunkEncoder {
    log::debug!("Initialisation de l'encodeur {}", set.name());
    let encoder = match set {
        BlockSet::DoubleBlocks => sets::double_blocks(),
        BlockSet::FullBlocks => sets::full_blocks(),
        BlockSet::Blocks1x2 => sets::blocks_1x2(),
        BlockSet::Blocks2x2 => sets::blocks_2x2(),
        BlockSet::Blocks2x3 => sets::blocks_2x3(),
        BlockSet::Blocks2x4 => sets::blocks_2x4(),
        BlockSet::Braille2x4 => sets::braille_2x4(),
    };
    encoder.expect("table builtin invalide")
}

/// Encodeur statique du jeu donné.
///
/// # Example
/// ```
/// use pg_blocks::render::encoder;
/// use pg_core::config::BlockSet;
/// assert_eq!(encoder(BlockSet::Braille2x4).palette_len(), 256);
/// ```
#[must_use]
pub fn encoder(set: BlockSet) -> &'static ChunkEncoder {
    &ENCODERS[set as usize]
}

/// Rend un bitmap : une ligne de texte par ligne de chunks.
///
/// Toutes les lignes ont la même largeur en caractères,
/// `ceil(width/chunk_w) ×` largeur de glyphe.
///
/// # Example
/// ```
/// use pg_blocks::render;
/// use pg_core::bitmap::Bitmap;
/// use pg_core::config::BlockSet;
///
/// let bitmap = Bitmap::from_rows(&[vec![1, 0, 1]]).unwrap();
/// assert_eq!(render(&bitmap, BlockSet::FullBlocks), vec!["█ █"]);
/// ```
#[must_use]
pub fn render(bitmap: &Bitmap, set: BlockSet) -> Vec<String> {
    encoder(set).encode(bitmap).lines()
}

/// Rend un bitmap avec un jeu désigné par son nom.
///
/// # Errors
/// `CoreError::UnknownBlockSet` si le nom n'est pas un des sept jeux ;
/// aucune sortie n'est produite dans ce cas.
///
/// # Example
/// ```
/// use pg_blocks::render_named;
/// use pg_core::bitmap::Bitmap;
///
/// let bitmap = Bitmap::from_rows(&[vec![1]]).unwrap();
/// assert_eq!(render_named(&bitmap, "DOUBLE_BLOCKS").unwrap(), vec!["██"]);
/// assert!(render_named(&bitmap, "TRIPLE_BLOCKS").is_err());
/// ```
pub fn render_named(bitmap: &Bitmap, name: &str) -> Result<Vec<String>, CoreError> {
    Ok(render(bitmap, name.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Forme de chunk et taille de palette attendues par jeu.
    const SHAPES: [(BlockSet, u32, u32, usize); 7] = [
        (BlockSet::DoubleBlocks, 1, 1, 2),
        (BlockSet::FullBlocks, 1, 1, 2),
        (BlockSet::Blocks1x2, 1, 2, 4),
        (BlockSet::Blocks2x2, 2, 2, 16),
        (BlockSet::Blocks2x3, 2, 3, 64),
        (BlockSet::Blocks2x4, 2, 4, 256),
        (BlockSet::Braille2x4, 2, 4, 256),
    ];

    #[test]
    fn registry_builds_all_seven_sets() {
        for (set, width, height, palette) in SHAPES {
            let enc = encoder(set);
            assert_eq!(enc.chunk_width(), width, "{}", set.name());
            assert_eq!(enc.chunk_height(), height, "{}", set.name());
            assert_eq!(enc.palette_len(), palette, "{}", set.name());
        }
    }

    #[test]
    fn output_dimensions_round_up() {
        let bitmap = Bitmap::new(5, 7);
        for (set, width, height, _) in SHAPES {
            let grid = encoder(set).encode(&bitmap);
            assert_eq!(grid.width, 5_u32.div_ceil(width), "{}", set.name());
            assert_eq!(grid.height, 7_u32.div_ceil(height), "{}", set.name());
        }
    }

    #[test]
    fn all_background_maps_to_first_glyph() {
        for (set, width, height, _) in SHAPES {
            let bitmap = Bitmap::new(width * 3, height * 2);
            let enc = encoder(set);
            let first = enc.glyph(0).unwrap();
            let expected = first.repeat(3);
            for line in render(&bitmap, set) {
                assert_eq!(line, expected, "{}", set.name());
            }
        }
    }

    #[test]
    fn all_foreground_maps_to_last_glyph() {
        for (set, width, height, palette) in SHAPES {
            let mut bitmap = Bitmap::new(width * 3, height * 2);
            for bit in &mut bitmap.bits {
                *bit = true;
            }
            let enc = encoder(set);
            let last = enc.glyph(palette - 1).unwrap();
            let expected = last.repeat(3);
            for line in render(&bitmap, set) {
                assert_eq!(line, expected, "{}", set.name());
            }
        }
    }

    #[test]
    fn single_pixel_pads_into_one_octant_chunk() {
        let bitmap = Bitmap::from_rows(&[vec![1]]).unwrap();
        assert_eq!(render(&bitmap, BlockSet::Blocks2x4), vec!["\u{1CEA8}"]);
    }

    #[test]
    fn half_block_rows_pick_the_matching_half() {
        let top = Bitmap::from_rows(&[vec![1], vec![0]]).unwrap();
        assert_eq!(render(&top, BlockSet::Blocks1x2), vec!["▀"]);
        let bottom = Bitmap::from_rows(&[vec![0], vec![1]]).unwrap();
        assert_eq!(render(&bottom, BlockSet::Blocks1x2), vec!["▄"]);
    }

    #[test]
    fn full_blocks_three_by_three() {
        let bitmap = Bitmap::from_rows(&[vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]).unwrap();
        assert_eq!(
            render(&bitmap, BlockSet::FullBlocks),
            vec!["███", "███", "███"]
        );
    }

    #[test]
    fn double_blocks_widen_each_pixel() {
        let bitmap = Bitmap::from_rows(&[vec![1, 0, 1]]).unwrap();
        assert_eq!(render(&bitmap, BlockSet::DoubleBlocks), vec!["██  ██"]);
    }

    #[test]
    fn braille_full_chunk_is_u28ff() {
        let bitmap =
            Bitmap::from_rows(&[vec![1, 1], vec![1, 1], vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(render(&bitmap, BlockSet::Braille2x4), vec!["⣿"]);
    }

    #[test]
    fn render_named_accepts_the_seven_names() {
        let bitmap = Bitmap::from_rows(&[vec![1]]).unwrap();
        for (set, ..) in SHAPES {
            assert!(render_named(&bitmap, set.name()).is_ok());
        }
    }

    #[test]
    fn render_named_rejects_unknown_name() {
        let bitmap = Bitmap::from_rows(&[vec![1]]).unwrap();
        let err = render_named(&bitmap, "BLOCKS_5X5").unwrap_err();
        assert!(matches!(err, CoreError::UnknownBlockSet { .. }));
    }

    #[test]
    fn lines_share_the_same_character_width() {
        // 5 pixels de large sous des chunks 2 de large : 3 chunks par ligne.
        let bitmap = Bitmap::from_rows(&[
            vec![1, 0, 1, 0, 1],
            vec![0, 1, 0, 1, 0],
            vec![1, 1, 1, 1, 1],
        ])
        .unwrap();
        for (set, width, _, _) in SHAPES {
            let expected = (5_u32.div_ceil(width)
                * encoder(set).glyph(0).unwrap().chars().count() as u32)
                as usize;
            for line in render(&bitmap, set) {
                assert_eq!(line.chars().count(), expected, "{}", set.name());
            }
        }
    }
}
