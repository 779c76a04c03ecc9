use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use pg_core::bitmap::Bitmap;
use pg_core::config::{BlockSet, RenderOptions};

pub mod cli;
pub mod pattern;
pub mod procedural;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Lister les jeux si demandé
    if cli.list_sets {
        print_sets();
        return Ok(());
    }

    // 4. Valider la source
    cli.validate_source()?;

    // 5. Charger les options et appliquer les overrides CLI
    let options = resolve_options(&cli)?;

    // 6. Construire le bitmap
    let mut bitmap = load_bitmap(&cli, &options)?;
    if options.invert {
        bitmap.invert();
    }
    log::info!(
        "Bitmap {}×{}, jeu {}",
        bitmap.width,
        bitmap.height,
        options.block_set.name()
    );

    // 7. Rendre et imprimer
    for line in pg_blocks::render(&bitmap, options.block_set) {
        println!("{line}");
    }

    Ok(())
}

/// Resolve options: config file first, CLI flags override.
fn resolve_options(cli: &cli::Cli) -> Result<RenderOptions> {
    let mut options = if cli.config.exists() {
        pg_core::config::load_options(&cli.config)?
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        RenderOptions::default()
    };

    if let Some(ref name) = cli.set {
        options.block_set = name.parse::<BlockSet>()?;
    }
    if cli.invert {
        options.invert = true;
    }
    if let Some(ref on_chars) = cli.on_chars {
        options.on_chars.clone_from(on_chars);
    }

    options.sanitize();
    Ok(options)
}

/// Construit le bitmap depuis le motif texte ou le générateur procédural.
fn load_bitmap(cli: &cli::Cli, options: &RenderOptions) -> Result<Bitmap> {
    if let Some(ref name) = cli.demo {
        return procedural::generate(name, cli.width, cli.height);
    }

    let Some(ref path) = cli.pattern else {
        anyhow::bail!("Aucune source spécifiée. Donnez un chemin de motif ou --demo.");
    };
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Lecture de stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()))?
    };
    Ok(pattern::parse_pattern(&text, &options.on_chars))
}

/// Affiche les sept jeux avec leur forme de chunk et leur palette.
fn print_sets() {
    println!("Jeux de blocs disponibles :");
    for set in BlockSet::ALL {
        let encoder = pg_blocks::render::encoder(set);
        println!(
            "  {:<13} chunk {}×{}  palette {}",
            set.name(),
            encoder.chunk_width(),
            encoder.chunk_height(),
            encoder.palette_len()
        );
    }
}
