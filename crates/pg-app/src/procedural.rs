//! Générateurs de bitmaps de démonstration.

use pg_core::bitmap::Bitmap;

/// Fabrique le bitmap du générateur choisi par l'utilisateur.
///
/// # Errors
/// Retourne une erreur si le nom n'est pas reconnu.
pub fn generate(name: &str, width: u32, height: u32) -> anyhow::Result<Bitmap> {
    match name.to_lowercase().as_str() {
        "checker" => Ok(checker(width, height)),
        "disc" => Ok(disc(width, height)),
        "mandelbrot" => Ok(mandelbrot(width, height)),
        _ => anyhow::bail!(
            "Générateur inconnu : {name}. Supportés : checker, disc, mandelbrot"
        ),
    }
}

/// Damier de cases 4×4 pixels.
fn checker(width: u32, height: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            bitmap.set(x, y, (x / 4 + y / 4) % 2 == 0);
        }
    }
    bitmap
}

/// Disque plein centré, rayon adapté à la plus petite dimension.
fn disc(width: u32, height: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height);
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let radius = (cx.min(cy) - 0.5).max(0.0);
    for y in 0..height {
        for x in 0..width {
            let dx = f64::from(x) + 0.5 - cx;
            let dy = f64::from(y) + 0.5 - cy;
            bitmap.set(x, y, dx * dx + dy * dy <= radius * radius);
        }
    }
    bitmap
}

/// Champ d'appartenance de l'ensemble de Mandelbrot, cadré sur
/// x ∈ [-2.5, 1.0], y ∈ [-1.25, 1.25].
fn mandelbrot(width: u32, height: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height);
    let w = f64::from(width).max(1.0);
    let h = f64::from(height).max(1.0);
    let max_iter = 100;
    for py in 0..height {
        for px in 0..width {
            let cx = f64::from(px) / w * 3.5 - 2.5;
            let cy = f64::from(py) / h * 2.5 - 1.25;

            let mut x = 0.0;
            let mut y = 0.0;
            let mut iter = 0;

            // Z = Z² + C
            while x * x + y * y <= 4.0 && iter < max_iter {
                let xtemp = x * x - y * y + cx;
                y = 2.0 * x * y + cy;
                x = xtemp;
                iter += 1;
            }

            if iter == max_iter {
                bitmap.set(px, py, true);
            }
        }
    }
    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_dispatches_by_name() {
        assert!(generate("checker", 8, 8).is_ok());
        assert!(generate("DISC", 8, 8).is_ok());
        assert!(generate("Mandelbrot", 8, 8).is_ok());
        assert!(generate("plasma", 8, 8).is_err());
    }

    #[test]
    fn checker_alternates_cells() {
        let bitmap = checker(8, 8);
        assert!(bitmap.get(0, 0));
        assert!(!bitmap.get(4, 0));
        assert!(!bitmap.get(0, 4));
        assert!(bitmap.get(4, 4));
    }

    #[test]
    fn disc_covers_center_not_corners() {
        let bitmap = disc(16, 16);
        assert!(bitmap.get(8, 8));
        assert!(!bitmap.get(0, 0));
        assert!(!bitmap.get(15, 15));
    }

    #[test]
    fn mandelbrot_contains_origin_excludes_far_left() {
        let bitmap = mandelbrot(64, 48);
        // C = 0 est dans l'ensemble : colonne de x = 0 → px ≈ 2.5/3.5 × 64.
        let zero_px = (2.5 / 3.5 * 64.0) as u32;
        assert!(bitmap.get(zero_px, 24));
        // Le bord gauche du cadre (C ≈ -2.5) diverge immédiatement.
        assert!(!bitmap.get(0, 24));
    }
}
