use crate::error::CoreError;

/// Bitmap binaire. Stocke les pixels en row-major, un booléen par pixel.
///
/// Origine en haut à gauche. `false` = arrière-plan, `true` = avant-plan.
/// L'entrée d'un encodage n'est jamais mutée.
///
/// # Example
/// ```
/// use pg_core::bitmap::Bitmap;
/// let bitmap = Bitmap::new(10, 4);
/// assert_eq!(bitmap.bits.len(), 40);
/// assert!(!bitmap.get(3, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    /// Pixels, row-major, `true` = avant-plan.
    pub bits: Vec<bool>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Bitmap {
    /// Crée un bitmap entièrement arrière-plan aux dimensions données.
    ///
    /// Les dimensions nulles sont permises (bitmap dégénéré).
    ///
    /// # Example
    /// ```
    /// use pg_core::bitmap::Bitmap;
    /// let bitmap = Bitmap::new(100, 50);
    /// assert_eq!(bitmap.width, 100);
    /// assert_eq!(bitmap.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: vec![false; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Construit un bitmap depuis des lignes d'entiers, zéro = arrière-plan.
    ///
    /// # Errors
    /// `CoreError::RaggedRows` si les lignes n'ont pas toutes la largeur
    /// de la ligne 0.
    ///
    /// # Example
    /// ```
    /// use pg_core::bitmap::Bitmap;
    /// let bitmap = Bitmap::from_rows(&[vec![1, 0], vec![0, 2]]).unwrap();
    /// assert!(bitmap.get(0, 0));
    /// assert!(!bitmap.get(1, 0));
    /// assert!(bitmap.get(1, 1));
    /// ```
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, CoreError> {
        let expected = rows.first().map_or(0, Vec::len);
        let mut bits = Vec::with_capacity(expected * rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(CoreError::RaggedRows {
                    row,
                    expected,
                    got: values.len(),
                });
            }
            bits.extend(values.iter().map(|&v| v != 0));
        }
        Ok(Self {
            bits,
            width: expected as u32,
            height: rows.len() as u32,
        })
    }

    /// Lit le pixel (x, y).
    ///
    /// Toute lecture hors du bitmap retourne l'arrière-plan — c'est ce qui
    /// complète implicitement les chunks partiels aux bords bas et droit.
    ///
    /// # Example
    /// ```
    /// use pg_core::bitmap::Bitmap;
    /// let bitmap = Bitmap::new(2, 2);
    /// assert!(!bitmap.get(5, 5));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Écrit le pixel (x, y).
    ///
    /// # Panics
    /// Panique si (x, y) est hors du bitmap.
    ///
    /// # Example
    /// ```
    /// use pg_core::bitmap::Bitmap;
    /// let mut bitmap = Bitmap::new(2, 2);
    /// bitmap.set(1, 1, true);
    /// assert!(bitmap.get(1, 1));
    /// ```
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        assert!(x < self.width && y < self.height, "pixel hors du bitmap");
        self.bits[y as usize * self.width as usize + x as usize] = on;
    }

    /// Échange avant-plan et arrière-plan.
    ///
    /// # Example
    /// ```
    /// use pg_core::bitmap::Bitmap;
    /// let mut bitmap = Bitmap::new(1, 1);
    /// bitmap.invert();
    /// assert!(bitmap.get(0, 0));
    /// ```
    pub fn invert(&mut self) {
        for bit in &mut self.bits {
            *bit = !*bit;
        }
    }

    /// `true` si une des dimensions est nulle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
