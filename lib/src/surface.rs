//! Immediate-mode drawing surface
//!
//! A small subset of the HTML canvas 2D API: enough to paint a background and
//! stamp rotated text. [`crate::canvas::Canvas`] is the raster implementation.

use crate::error::Result;

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill a rectangle with the current fill style, under the current transform
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Set the fill color from a CSS hex string
    fn set_fill_style(&mut self, color: &str) -> Result<()>;

    /// Set the font em size in pixels
    fn set_font(&mut self, size_px: f32) -> Result<()>;

    fn translate(&mut self, x: f32, y: f32);

    /// Rotate clockwise by `angle` radians (y points down)
    fn rotate(&mut self, angle: f32);

    /// Draw `text` with its alphabetic baseline starting at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<()>;

    /// Push the drawing state (transform, fill, font)
    fn save(&mut self);

    /// Pop the drawing state. No-op when nothing was saved.
    fn restore(&mut self);
}
