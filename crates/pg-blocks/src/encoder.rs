//! Moteur d'encodage chunk → glyphe.
//!
//! Chaque chunk de `chunk_h × chunk_w` pixels est packé en un index :
//! index = Σ 2^ordre[dy][dx] sur les pixels avant-plan, puis l'index
//! sélectionne le glyphe dans la palette de taille 2^(chunk_h·chunk_w).

use pg_core::bitmap::Bitmap;
use pg_core::error::CoreError;
use pg_core::grid::GlyphGrid;
use rayon::prelude::*;

/// Hauteur de grille (en chunks) en dessous de laquelle l'encodage reste
/// scalaire. Le coût de dispatch rayon dépasse le gain sur si peu de lignes.
const PAR_MIN_ROWS: u32 = 8;

/// Taille maximale d'un chunk en bits. Garde les poids `1 << rang` et la
/// palette `2^bits` dans des bornes raisonnables.
const MAX_CHUNK_BITS: usize = 24;

/// Encodeur chunk → glyphe pour une forme de chunk et une palette données.
///
/// Immuable après construction, partageable entre threads.
///
/// # Example
/// ```
/// use pg_blocks::encoder::ChunkEncoder;
/// use pg_core::bitmap::Bitmap;
///
/// let encoder = ChunkEncoder::from_chars(" █", &[&[0]]).unwrap();
/// let bitmap = Bitmap::from_rows(&[vec![1, 0, 1]]).unwrap();
/// assert_eq!(encoder.encode(&bitmap).to_text(), "█ █");
/// ```
#[derive(Clone, Debug)]
pub struct ChunkEncoder {
    /// Palette, indexée par la valeur packée du chunk.
    glyphs: Vec<Box<str>>,
    /// Poids de chaque pixel du chunk (`1 << rang`), row-major.
    weights: Vec<usize>,
    chunk_h: u32,
    chunk_w: u32,
}

impl ChunkEncoder {
    /// Construit un encodeur depuis une palette et un ordre de bits.
    ///
    /// L'ordre de bits a la forme du chunk et doit être une bijection sur
    /// `0..chunk_h*chunk_w` : chaque rang apparaît exactement une fois.
    ///
    /// # Errors
    /// - `CoreError::BitOrderShape` si l'ordre est vide, non rectangulaire
    ///   ou dépasse 24 bits par chunk ;
    /// - `CoreError::BitOrderRank` si un rang est hors plage ou dupliqué ;
    /// - `CoreError::PaletteSize` si la palette n'a pas `2^bits` glyphes.
    ///
    /// # Example
    /// ```
    /// use pg_blocks::encoder::ChunkEncoder;
    /// let encoder = ChunkEncoder::new(&["  ", "██"], &[&[0]]).unwrap();
    /// assert_eq!(encoder.palette_len(), 2);
    /// ```
    pub fn new(glyphs: &[&str], order: &[&[u8]]) -> Result<Self, CoreError> {
        let chunk_h = order.len();
        let chunk_w = order.first().map_or(0, |row| row.len());
        if chunk_h == 0 || chunk_w == 0 {
            return Err(CoreError::BitOrderShape {
                detail: "grille d'ordre vide".to_string(),
            });
        }
        for (row, ranks) in order.iter().enumerate() {
            if ranks.len() != chunk_w {
                return Err(CoreError::BitOrderShape {
                    detail: format!(
                        "ligne {row} de largeur {}, {chunk_w} attendue",
                        ranks.len()
                    ),
                });
            }
        }
        let bits = chunk_h * chunk_w;
        if bits > MAX_CHUNK_BITS {
            return Err(CoreError::BitOrderShape {
                detail: format!("chunk de {bits} bits, maximum {MAX_CHUNK_BITS}"),
            });
        }

        let mut seen = vec![false; bits];
        for &rank in order.iter().flat_map(|row| row.iter()) {
            let rank = rank as usize;
            if rank >= bits {
                return Err(CoreError::BitOrderRank {
                    detail: format!("rang {rank} hors de 0..{bits}"),
                });
            }
            if seen[rank] {
                return Err(CoreError::BitOrderRank {
                    detail: format!("rang {rank} dupliqué"),
                });
            }
            seen[rank] = true;
        }

        let expected = 1_usize << bits;
        if glyphs.len() != expected {
            return Err(CoreError::PaletteSize {
                expected,
                got: glyphs.len(),
            });
        }

        Ok(Self {
            glyphs: glyphs.iter().map(|&glyph| Box::from(glyph)).collect(),
            weights: order
                .iter()
                .flat_map(|row| row.iter())
                .map(|&rank| 1_usize << rank)
                .collect(),
            chunk_h: chunk_h as u32,
            chunk_w: chunk_w as u32,
        })
    }

    /// Construit un encodeur dont chaque glyphe est un seul caractère.
    ///
    /// # Errors
    /// Mêmes erreurs que [`ChunkEncoder::new`].
    ///
    /// # Example
    /// ```
    /// use pg_blocks::encoder::ChunkEncoder;
    /// let encoder = ChunkEncoder::from_chars(" ▀▄█", &[&[0], &[1]]).unwrap();
    /// assert_eq!(encoder.chunk_height(), 2);
    /// assert_eq!(encoder.chunk_width(), 1);
    /// ```
    pub fn from_chars(glyphs: &str, order: &[&[u8]]) -> Result<Self, CoreError> {
        let owned: Vec<String> = glyphs.chars().map(String::from).collect();
        let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
        Self::new(&refs, order)
    }

    /// Encode un bitmap en grille de glyphes.
    ///
    /// La grille couvre `ceil(height/chunk_h) × ceil(width/chunk_w)` chunks
    /// ancrés en haut à gauche ; les pixels lus au-delà des bords bas et
    /// droit sont arrière-plan. Infaillible : la construction a déjà validé
    /// palette et ordre de bits. Le bitmap n'est jamais muté.
    ///
    /// # Example
    /// ```
    /// use pg_blocks::encoder::ChunkEncoder;
    /// use pg_core::bitmap::Bitmap;
    ///
    /// let encoder = ChunkEncoder::from_chars(" ▀▄█", &[&[0], &[1]]).unwrap();
    /// let bitmap = Bitmap::from_rows(&[vec![1], vec![0]]).unwrap();
    /// assert_eq!(encoder.encode(&bitmap).to_text(), "▀");
    /// ```
    #[must_use]
    pub fn encode(&self, bitmap: &Bitmap) -> GlyphGrid<'_> {
        let width = bitmap.width.div_ceil(self.chunk_w);
        let height = bitmap.height.div_ceil(self.chunk_h);
        if width == 0 || height == 0 {
            return GlyphGrid {
                cells: Vec::new(),
                width,
                height,
            };
        }

        let mut cells: Vec<&str> =
            vec![self.glyphs[0].as_ref(); width as usize * height as usize];
        if height >= PAR_MIN_ROWS {
            cells
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(cy, row)| self.encode_row(bitmap, cy as u32, row));
        } else {
            for (cy, row) in cells.chunks_mut(width as usize).enumerate() {
                self.encode_row(bitmap, cy as u32, row);
            }
        }

        GlyphGrid {
            cells,
            width,
            height,
        }
    }

    /// Encode une ligne de chunks. `row` a exactement `width` cellules.
    fn encode_row<'a>(&'a self, bitmap: &Bitmap, cy: u32, row: &mut [&'a str]) {
        let base_y = cy * self.chunk_h;
        for (cx, cell) in row.iter_mut().enumerate() {
            let base_x = cx as u32 * self.chunk_w;
            let mut index = 0_usize;
            for dy in 0..self.chunk_h {
                for dx in 0..self.chunk_w {
                    if bitmap.get(base_x + dx, base_y + dy) {
                        index += self.weights[(dy * self.chunk_w + dx) as usize];
                    }
                }
            }
            *cell = self.glyphs[index].as_ref();
        }
    }

    /// Largeur de chunk en pixels.
    #[must_use]
    pub const fn chunk_width(&self) -> u32 {
        self.chunk_w
    }

    /// Hauteur de chunk en pixels.
    #[must_use]
    pub const fn chunk_height(&self) -> u32 {
        self.chunk_h
    }

    /// Nombre de glyphes de la palette (`2^bits`).
    #[must_use]
    pub fn palette_len(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyphe à l'index packé donné, `None` hors palette.
    #[must_use]
    pub fn glyph(&self, index: usize) -> Option<&str> {
        self.glyphs.get(index).map(AsRef::as_ref)
    }
}
