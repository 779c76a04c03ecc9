//! Parsing des motifs texte en bitmaps.

use pg_core::bitmap::Bitmap;

/// Convertit un motif texte en bitmap.
///
/// Chaque ligne du texte est une ligne de pixels : les caractères de
/// `on_chars` sont avant-plan, tout le reste arrière-plan. Les lignes
/// courtes sont complétées à droite par de l'arrière-plan.
#[must_use]
pub fn parse_pattern(text: &str, on_chars: &str) -> Bitmap {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let mut bitmap = Bitmap::new(width as u32, lines.len() as u32);
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            if on_chars.contains(ch) {
                bitmap.set(x as u32, y as u32, true);
            }
        }
    }
    bitmap
}
