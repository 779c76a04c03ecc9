use thiserror::Error;

/// Errors originating from bitmap construction and encoder configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input rows do not form a rectangular 2D grid.
    #[error("Bitmap non rectangulaire : ligne {row} contient {got} pixels, {expected} attendus")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width taken from row 0.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },

    /// Bit order grid is empty, non-rectangular, or too large.
    #[error("Ordre de bits invalide : {detail}")]
    BitOrderShape {
        /// Description of the shape violation.
        detail: String,
    },

    /// Bit order ranks are not a bijection onto `0..chunk size`.
    #[error("Rangs de bits invalides : {detail}")]
    BitOrderRank {
        /// Description of the rank violation.
        detail: String,
    },

    /// Palette length does not equal 2^(chunk size).
    #[error("Palette invalide : {got} glyphes fournis, {expected} attendus")]
    PaletteSize {
        /// Expected palette length, 2^(chunk size).
        expected: usize,
        /// Palette length actually supplied.
        got: usize,
    },

    /// Requested block set name is not among the supported sets.
    #[error("Jeu de blocs inconnu : {name}")]
    UnknownBlockSet {
        /// The name that was not recognized.
        name: String,
    },
}
