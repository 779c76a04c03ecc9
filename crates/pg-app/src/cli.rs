use std::path::PathBuf;

use clap::Parser;

/// pixgrid : rendu pseudographique de bitmaps binaires.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Motif texte à rendre ("-" pour stdin).
    pub pattern: Option<PathBuf>,

    /// Générateur procédural : "checker", "disc", "mandelbrot".
    #[arg(long)]
    pub demo: Option<String>,

    /// Largeur du bitmap généré par --demo, en pixels.
    #[arg(long, default_value_t = 64)]
    pub width: u32,

    /// Hauteur du bitmap généré par --demo, en pixels.
    #[arg(long, default_value_t = 48)]
    pub height: u32,

    /// Jeu de blocs : BLOCKS_2X2, braille-2x4, etc. Voir --list-sets.
    #[arg(short, long)]
    pub set: Option<String>,

    /// Échanger avant-plan et arrière-plan.
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Caractères comptés comme avant-plan dans le motif texte.
    #[arg(long)]
    pub on_chars: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Lister les jeux de blocs disponibles et quitter.
    #[arg(long, default_value_t = false)]
    pub list_sets: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one bitmap source is provided.
    ///
    /// # Errors
    /// Returns an error if zero or more than one source is specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        let count = usize::from(self.pattern.is_some()) + usize::from(self.demo.is_some());

        if count == 0 {
            anyhow::bail!("Aucune source spécifiée. Donnez un chemin de motif ou --demo.");
        }
        if count > 1 {
            anyhow::bail!("Une seule source à la fois. Donnez un chemin de motif OU --demo.");
        }
        Ok(())
    }
}
