use crate::error::Result;
use crate::grid::GridPoint;
use crate::surface::Surface;

pub const BACKGROUND: &str = "#212529";

/// Linear interpolation between `min` and `max` by `t`
pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min * (1.0 - t) + max * t
}

/// Paint the background, then every point in order
///
/// Each point is drawn inside its own save/restore pair so its translate and
/// rotate never leak into the next one. Stops at the first drawing error.
pub fn render<S: Surface>(
    surface: &mut S,
    points: &[GridPoint],
    background: &str,
    margin: f32,
) -> Result<()> {
    let width = surface.width() as f32;
    let height = surface.height() as f32;

    surface.set_fill_style(background)?;
    surface.fill_rect(0.0, 0.0, width, height);

    for point in points {
        let [u, v] = point.position;

        // uv back to pixels
        let x = lerp(margin, width - margin, u as f32);
        let y = lerp(margin, height - margin, v as f32);

        surface.save();
        let drawn = draw_point(surface, point, x, y, width);
        surface.restore();
        drawn?;
    }

    log::debug!("rendered {} symbols on {}x{}", points.len(), width, height);
    Ok(())
}

fn draw_point<S: Surface>(surface: &mut S, point: &GridPoint, x: f32, y: f32, width: f32) -> Result<()> {
    surface.set_fill_style(point.color)?;
    surface.set_font(point.radius as f32 * width)?;
    surface.translate(x, y);
    surface.rotate(point.rotation as f32);
    surface.fill_text(point.character, 0.0, 0.0)
}
