//! Glyph Grid - generative phone wallpaper
//!
//! Lays a 45×45 lattice over the canvas, gives every cell a symbol, color,
//! size and rotation from seeded noise and random draws, drops about half of
//! the cells, then paints the survivors over a dark background.
//!
//! Generation and drawing are separate phases: [`generate`] produces an
//! immutable [`Sketch`], [`render`] paints it onto any [`Surface`].
//!
//! # Example
//! ```no_run
//! use glyph_grid::{SketchConfig, render_wallpaper};
//!
//! let config = SketchConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let (sketch, image) = render_wallpaper(&config).unwrap();
//! println!("{} symbols from seed {}", sketch.points.len(), sketch.seed);
//! glyph_grid::save_png(&image, std::path::Path::new("wallpaper.png")).unwrap();
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod font;
pub mod grid;
pub mod palette;
pub mod random;
pub mod render;
pub mod surface;
pub mod symbols;

// Re-export main types for convenience
pub use canvas::Canvas;
pub use config::SketchConfig;
pub use error::{Error, Result};
pub use grid::{GridPoint, Sketch, generate};
pub use random::Random;
pub use render::render;
pub use surface::Surface;

pub use font::FontStack;

use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Generate and paint one wallpaper, loading fonts from `config`
///
/// Validation runs before the font lookup, so a bad configuration never
/// touches the filesystem.
pub fn render_wallpaper(config: &SketchConfig) -> Result<(Sketch, RgbaImage)> {
    config.validate().map_err(Error::InvalidConfig)?;
    let fonts = font::load_stack(&config.font_family, config.font_path.as_deref())?;
    render_wallpaper_with(config, &fonts)
}

/// Generate and paint one wallpaper with already loaded fonts
///
/// 1. Validate the configuration
/// 2. Seed the randomness context (fresh seed when none is configured)
/// 3. Generate the grid
/// 4. Paint onto a raster canvas
pub fn render_wallpaper_with(config: &SketchConfig, fonts: &FontStack) -> Result<(Sketch, RgbaImage)> {
    config.validate().map_err(Error::InvalidConfig)?;

    let mut random = Random::from_seeds(config.seed, config.filter_seed);
    let sketch = generate(&mut random, config);

    let mut canvas = Canvas::new(config.width, config.height, fonts.clone());
    render(&mut canvas, &sketch.points, &config.background, config.margin)?;

    Ok((sketch, canvas.into_image()))
}

/// Write a wallpaper as PNG, whatever the file extension
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!("saved {}x{} wallpaper to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SketchConfig {
            count: 0,
            ..Default::default()
        };
        assert!(matches!(render_wallpaper(&config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_font_file_is_fatal() {
        let config = SketchConfig {
            font_path: Some(PathBuf::from("/nonexistent/glyph-grid/face.ttf")),
            ..Default::default()
        };
        assert!(matches!(render_wallpaper(&config), Err(Error::Io(_))));
    }

    fn fixture_config() -> SketchConfig {
        SketchConfig {
            width: 124,
            height: 268,
            count: 9,
            seed: Some(1),
            font_path: Some(PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/tests/fixtures/DejaVuSans.ttf"
            ))),
            ..Default::default()
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glyph-grid-lib-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_small_wallpaper() {
        let config = fixture_config();

        let (sketch, image) = render_wallpaper(&config).unwrap();
        assert_eq!(image.dimensions(), (124, 268));
        assert_eq!(sketch.seed, 1);
        // Opaque everywhere: background first, glyphs on top
        assert!(image.pixels().all(|p| p[3] == 255));

        let background = palette::parse_color(render::BACKGROUND).unwrap();
        let painted = image.pixels().filter(|p| **p != background).count();
        assert!(!sketch.points.is_empty());
        assert!(painted > 0);
    }

    #[test]
    fn test_preloaded_fonts_skip_lookup() {
        let config = SketchConfig {
            // Never looked up when fonts are passed in
            font_family: "No Such Family".to_string(),
            font_path: None,
            ..fixture_config()
        };
        let path = fixture_config().font_path.unwrap();
        let fonts = FontStack::single(font::load_path(&path).unwrap());

        let (sketch, first) = render_wallpaper_with(&config, &fonts).unwrap();
        assert_eq!(first.dimensions(), (124, 268));
        assert_eq!(sketch.seed, 1);

        // Reusing the stack gives the same picture again
        let (_, again) = render_wallpaper_with(&config, &fonts).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_preloaded_fonts_still_validate() {
        let config = SketchConfig {
            count: 0,
            ..fixture_config()
        };
        assert!(matches!(
            render_wallpaper_with(&config, &FontStack::default()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_save_png() {
        let dir = scratch_dir("save");
        let (_, image) = render_wallpaper(&fixture_config()).unwrap();

        // Extension does not pick the format
        let path = dir.join("wallpaper.out");
        save_png(&image, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        assert_eq!(image::load_from_memory(&bytes).unwrap().to_rgba8(), image);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_png_into_missing_dir() {
        let image = RgbaImage::new(2, 2);
        let path = Path::new("/nonexistent/glyph-grid/wallpaper.png");
        assert!(matches!(save_png(&image, path), Err(Error::Image(_))));
    }
}
