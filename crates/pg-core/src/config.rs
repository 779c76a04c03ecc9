use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Caractères comptés comme avant-plan lors du parsing d'un motif texte.
pub const DEFAULT_ON_CHARS: &str = "#@1█";

/// Jeu de blocs : forme de chunk + palette nommées.
///
/// # Example
/// ```
/// use pg_core::config::BlockSet;
/// let set = BlockSet::default();
/// assert!(matches!(set, BlockSet::Blocks2x2));
/// assert_eq!(set.name(), "BLOCKS_2X2");
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum BlockSet {
    /// Chunks 1×1, chaque pixel devient deux colonnes (`██` ou deux espaces).
    #[serde(alias = "DOUBLE_BLOCKS")]
    DoubleBlocks,
    /// Chunks 1×1, un caractère par pixel (`█` ou espace).
    #[serde(alias = "FULL_BLOCKS")]
    FullBlocks,
    /// Chunks 2×1 verticaux, demi-blocs (▀/▄).
    #[serde(alias = "BLOCKS_1X2")]
    Blocks1x2,
    /// Chunks 2×2, quadrants Block Elements.
    #[default]
    #[serde(alias = "BLOCKS_2X2")]
    Blocks2x2,
    /// Chunks 3×2, sextants Unicode 13.0.
    #[serde(alias = "BLOCKS_2X3")]
    Blocks2x3,
    /// Chunks 4×2, octants Unicode 16.0.
    #[serde(alias = "BLOCKS_2X4")]
    Blocks2x4,
    /// Chunks 4×2, motifs braille U+2800..U+28FF.
    #[serde(alias = "BRAILLE_2X4")]
    Braille2x4,
}

impl BlockSet {
    /// Les sept jeux, dans l'ordre des discriminants.
    pub const ALL: [Self; 7] = [
        Self::DoubleBlocks,
        Self::FullBlocks,
        Self::Blocks1x2,
        Self::Blocks2x2,
        Self::Blocks2x3,
        Self::Blocks2x4,
        Self::Braille2x4,
    ];

    /// Nom canonique du jeu.
    ///
    /// # Example
    /// ```
    /// use pg_core::config::BlockSet;
    /// assert_eq!(BlockSet::Braille2x4.name(), "BRAILLE_2X4");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DoubleBlocks => "DOUBLE_BLOCKS",
            Self::FullBlocks => "FULL_BLOCKS",
            Self::Blocks1x2 => "BLOCKS_1X2",
            Self::Blocks2x2 => "BLOCKS_2X2",
            Self::Blocks2x3 => "BLOCKS_2X3",
            Self::Blocks2x4 => "BLOCKS_2X4",
            Self::Braille2x4 => "BRAILLE_2X4",
        }
    }
}

impl FromStr for BlockSet {
    type Err = CoreError;

    /// Résout un nom de jeu, insensible à la casse, `-` et `_` équivalents.
    ///
    /// # Example
    /// ```
    /// use pg_core::config::BlockSet;
    /// assert_eq!("blocks-2x4".parse::<BlockSet>().unwrap(), BlockSet::Blocks2x4);
    /// assert!("BLOCKS_9X9".parse::<BlockSet>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|set| set.name() == canonical)
            .ok_or_else(|| CoreError::UnknownBlockSet {
                name: s.to_string(),
            })
    }
}

/// Options de rendu de l'application.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use pg_core::config::RenderOptions;
/// let options = RenderOptions::default();
/// assert!(!options.invert);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RenderOptions {
    /// Jeu de blocs utilisé pour l'encodage.
    pub block_set: BlockSet,
    /// Échanger avant-plan et arrière-plan avant l'encodage.
    pub invert: bool,
    /// Caractères avant-plan pour les motifs texte.
    pub on_chars: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_set: BlockSet::default(),
            invert: false,
            on_chars: DEFAULT_ON_CHARS.to_string(),
        }
    }
}

impl RenderOptions {
    /// Restore invalid fields to their defaults.
    /// Called after TOML deserialization to prevent unusable values.
    pub fn sanitize(&mut self) {
        if self.on_chars.is_empty() {
            self.on_chars = DEFAULT_ON_CHARS.to_string();
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct OptionsFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    block_set: Option<BlockSet>,
    invert: Option<bool>,
    on_chars: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use pg_core::config::load_options;
/// use std::path::Path;
/// let options = load_options(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_options(path: &Path) -> Result<RenderOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: OptionsFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut options = RenderOptions::default();

    if let Some(r) = file.render {
        if let Some(v) = r.block_set {
            options.block_set = v;
        }
        if let Some(v) = r.invert {
            options.invert = v;
        }
        if let Some(v) = r.on_chars {
            options.on_chars = v;
        }
    }

    options.sanitize();
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_accepts_canonical_and_kebab_names() {
        assert_eq!(
            "DOUBLE_BLOCKS".parse::<BlockSet>().unwrap(),
            BlockSet::DoubleBlocks
        );
        assert_eq!(
            "braille-2x4".parse::<BlockSet>().unwrap(),
            BlockSet::Braille2x4
        );
        assert_eq!(
            "  blocks_1x2 ".parse::<BlockSet>().unwrap(),
            BlockSet::Blocks1x2
        );
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "BLOCKS_3X3".parse::<BlockSet>().unwrap_err();
        match err {
            CoreError::UnknownBlockSet { name } => assert_eq!(name, "BLOCKS_3X3"),
            other => panic!("erreur inattendue : {other}"),
        }
    }

    #[test]
    fn every_name_round_trips() {
        for set in BlockSet::ALL {
            assert_eq!(set.name().parse::<BlockSet>().unwrap(), set);
        }
    }

    #[test]
    fn load_merges_partial_section_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]").unwrap();
        writeln!(file, "block_set = \"BLOCKS_2X3\"").unwrap();
        writeln!(file, "invert = true").unwrap();
        let options = load_options(file.path()).unwrap();
        assert_eq!(options.block_set, BlockSet::Blocks2x3);
        assert!(options.invert);
        assert_eq!(options.on_chars, DEFAULT_ON_CHARS);
    }

    #[test]
    fn load_without_section_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# options vides").unwrap();
        let options = load_options(file.path()).unwrap();
        assert_eq!(options.block_set, BlockSet::default());
        assert!(!options.invert);
    }

    #[test]
    fn load_restores_empty_on_chars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]").unwrap();
        writeln!(file, "on_chars = \"\"").unwrap();
        let options = load_options(file.path()).unwrap();
        assert_eq!(options.on_chars, DEFAULT_ON_CHARS);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_options(Path::new("/nonexistent/options.toml")).is_err());
    }
}
