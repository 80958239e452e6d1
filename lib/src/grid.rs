//! Grid generation
//!
//! All randomness happens here. The renderer only reads the finished points.

use crate::config::SketchConfig;
use crate::palette::{PALETTES, Palette};
use crate::random::Random;
use crate::symbols::{self, WeightedSet};

pub const MIN_RADIUS: f64 = 0.03;
pub const RADIUS_RANGE: f64 = 0.05;

/// One placed symbol, in uv space
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    /// Normalized (u, v) in [0, 1]
    pub position: [f64; 2],
    /// Font size as a fraction of the canvas width, in [0.03, 0.08]
    pub radius: f64,
    pub color: &'static str,
    /// Radians
    pub rotation: f64,
    pub character: &'static str,
}

/// Output of the generation phase
///
/// `points` is in paint order: later points cover earlier ones.
#[derive(Debug, Clone)]
pub struct Sketch {
    pub seed: u64,
    pub palette: Palette,
    pub points: Vec<GridPoint>,
}

/// Normalized coordinate of lattice index `i` out of `count`
///
/// Evenly spans [0, 1] when `count > 1`; a single cell sits at the center.
pub fn lattice_coord(i: u32, count: u32) -> f64 {
    if count <= 1 {
        0.5
    } else {
        i as f64 / (count - 1) as f64
    }
}

/// Number of lattice cells, widened before multiplying
fn cell_count(count: u32) -> usize {
    count as usize * count as usize
}

/// Build every lattice point, before any filtering
///
/// Outer loop over x, inner over y.
pub fn create_grid(
    random: &mut Random,
    palette: &Palette,
    symbols: &WeightedSet<&'static str>,
    count: u32,
    radius_frequency: f64,
) -> Vec<GridPoint> {
    let mut points = Vec::with_capacity(cell_count(count));

    for x in 0..count {
        for y in 0..count {
            let u = lattice_coord(x, count);
            let v = lattice_coord(y, count);

            // Simplex output can overshoot 1 by a hair
            let magnitude = random.noise2d(u, v, radius_frequency).abs().min(1.0);
            let radius = MIN_RADIUS + magnitude * RADIUS_RANGE;
            let rotation = random.noise2d(u, v, 1.0);

            let color = random.pick(palette).copied().unwrap_or(palette[0]);
            let character = random.weighted(symbols).copied().unwrap_or(symbols::GLYPHS[0]);

            points.push(GridPoint {
                position: [u, v],
                radius,
                color,
                rotation,
                character,
            });
        }
    }

    points
}

/// Keep each point independently with probability `keep_probability`
///
/// Order is preserved.
pub fn retain_random(
    points: Vec<GridPoint>,
    random: &mut Random,
    keep_probability: f64,
) -> Vec<GridPoint> {
    points
        .into_iter()
        .filter(|_| random.keep(keep_probability))
        .collect()
}

/// Run the whole generation phase
///
/// 1. Pick one palette
/// 2. Build the symbol catalog
/// 3. Create the full lattice of points
/// 4. Randomly drop about half of them
pub fn generate(random: &mut Random, config: &SketchConfig) -> Sketch {
    let palette = *random.pick(&PALETTES).unwrap_or(&PALETTES[0]);
    let symbols = symbols::catalog();

    let grid = create_grid(
        random,
        &palette,
        &symbols,
        config.count,
        config.radius_frequency,
    );
    let total = grid.len();
    let points = retain_random(grid, random, config.keep_probability);

    log::info!("seed {} palette {:?}", random.seed(), palette);
    log::debug!("kept {} of {} grid points", points.len(), total);

    Sketch {
        seed: random.seed(),
        palette,
        points,
    }
}
