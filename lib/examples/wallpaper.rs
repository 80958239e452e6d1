/// Render one wallpaper to a PNG
///
/// Usage: cargo run --example wallpaper -- [seed] [output.png]
///
/// Set GLYPH_GRID_FONT to a .ttf/.otf file to skip the system font lookup.
use glyph_grid::{SketchConfig, render_wallpaper, save_png};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => Some(seed),
        Some(Err(e)) => {
            eprintln!("seed must be an unsigned integer: {}", e);
            return ExitCode::FAILURE;
        }
        None => None,
    };
    let output = args.next().unwrap_or_else(|| "wallpaper.png".to_string());

    let config = SketchConfig {
        seed,
        font_path: std::env::var_os("GLYPH_GRID_FONT").map(PathBuf::from),
        ..Default::default()
    };

    println!("Glyph Grid - Wallpaper");
    println!("======================\n");
    println!("Canvas: {}x{}", config.width, config.height);
    println!("Lattice: {0}x{0}", config.count);

    let (sketch, image) = match render_wallpaper(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("render failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Seed: {}", sketch.seed);
    println!("Palette: {}", sketch.palette.join(" "));
    println!("Symbols: {}", sketch.points.len());

    if let Err(e) = save_png(&image, Path::new(&output)) {
        eprintln!("failed to save {}: {}", output, e);
        return ExitCode::FAILURE;
    }
    println!("\n✓ Saved wallpaper to: {}", output);
    ExitCode::SUCCESS
}
