/// Grille de glyphes produite par un encodage. Un glyphe par chunk.
///
/// Les cellules empruntent les glyphes de l'encodeur qui les a produites,
/// aucun texte n'est copié avant [`GlyphGrid::to_text`].
///
/// # Example
/// ```
/// use pg_core::grid::GlyphGrid;
/// let grid = GlyphGrid { cells: vec!["█", " ", " ", "█"], width: 2, height: 2 };
/// assert_eq!(grid.to_text(), "█ \n █");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid<'a> {
    /// Glyphes, row-major, un par chunk.
    pub cells: Vec<&'a str>,
    /// Width in chunks.
    pub width: u32,
    /// Height in chunks.
    pub height: u32,
}

impl GlyphGrid<'_> {
    /// Lit le glyphe du chunk (x, y), `None` hors de la grille.
    ///
    /// # Example
    /// ```
    /// use pg_core::grid::GlyphGrid;
    /// let grid = GlyphGrid { cells: vec!["▀"], width: 1, height: 1 };
    /// assert_eq!(grid.glyph(0, 0), Some("▀"));
    /// assert_eq!(grid.glyph(1, 0), None);
    /// ```
    #[must_use]
    pub fn glyph(&self, x: u32, y: u32) -> Option<&str> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Concatène la ligne de chunks `y`.
    ///
    /// # Panics
    /// Panique si `y` est hors de la grille.
    #[must_use]
    pub fn line(&self, y: u32) -> String {
        assert!(y < self.height, "ligne hors de la grille");
        let width = self.width as usize;
        let start = y as usize * width;
        self.cells[start..start + width].concat()
    }

    /// Toutes les lignes, du haut vers le bas.
    ///
    /// Une grille de largeur nulle produit des lignes vides, une grille de
    /// hauteur nulle n'en produit aucune.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.line(y)).collect()
    }

    /// Rend la grille en texte, lignes jointes par `\n`, sans saut final.
    ///
    /// # Example
    /// ```
    /// use pg_core::grid::GlyphGrid;
    /// let grid = GlyphGrid { cells: vec!["▌", "▐"], width: 1, height: 2 };
    /// assert_eq!(grid.to_text(), "▌\n▐");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    /// `true` si une des dimensions est nulle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
