use crate::error::{Error, Result};
use crate::font::FontStack;
use crate::palette::parse_color;
use crate::surface::Surface;
use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use imageproc::pixelops::interpolate;
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Drawing state saved and restored as a unit
#[derive(Debug, Clone, Copy)]
struct DrawState {
    transform: Projection,
    fill: Rgba<u8>,
    font_px: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Projection::translate(0.0, 0.0),
            fill: Rgba([0, 0, 0, 255]),
            font_px: 10.0,
        }
    }
}

/// Coverage of one glyph in local (untransformed) space
///
/// The mask keeps a one pixel empty border so bilinear sampling fades out at
/// the glyph edges instead of cutting off.
struct GlyphMask {
    left: f32,
    top: f32,
    mask: GrayImage,
}

impl GlyphMask {
    fn rasterize(outlined: &OutlinedGlyph) -> Self {
        let bounds = outlined.px_bounds();
        let width = bounds.width().max(0.0) as u32;
        let height = bounds.height().max(0.0) as u32;
        let mut mask = GrayImage::new(width + 2, height + 2);

        outlined.draw(|x, y, c| {
            if x < width && y < height {
                let value = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
                mask.put_pixel(x + 1, y + 1, Luma([value]));
            }
        });

        Self {
            left: bounds.min.x - 1.0,
            top: bounds.min.y - 1.0,
            mask,
        }
    }
}

/// Smallest pixel box holding `points`, clipped to `width` x `height`
fn pixel_bounds(points: &[(f32, f32)], width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min).floor().max(0.0);
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).floor().max(0.0);
    let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max).ceil().min(width as f32);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).ceil().min(height as f32);
    if !(min_x < max_x && min_y < max_y) {
        return None;
    }
    Some((min_x as u32, min_y as u32, max_x as u32, max_y as u32))
}

/// Raster drawing surface backed by an RGBA image
///
/// Text is drawn from an ordered [`FontStack`]; each character uses the first
/// face that has a glyph for it.
pub struct Canvas {
    image: RgbaImage,
    fonts: FontStack,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32, fonts: FontStack) -> Self {
        Self {
            fonts,
            ..Self::without_font(width, height)
        }
    }

    /// A canvas that can fill shapes but fails on text
    pub fn without_font(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            fonts: FontStack::default(),
            state: DrawState::default(),
            stack: Vec::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Number of states currently saved
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Current transform, mapping local coordinates to canvas pixels
    pub fn transform(&self) -> Projection {
        self.state.transform
    }

    /// CSS pixel size to ab_glyph scale
    ///
    /// CSS sizes the em square, ab_glyph sizes ascent-to-descent.
    fn px_scale(font: &FontVec, font_px: f32) -> PxScale {
        font.pt_to_px_scale(font_px * 0.75)
            .unwrap_or(PxScale::from(font_px))
    }

    /// Lay out `text` from (x, y), one mask per drawable character
    ///
    /// Characters no face covers draw nothing but still take the primary
    /// face's `.notdef` advance.
    fn layout(&self, text: &str, x: f32, y: f32) -> Result<Vec<GlyphMask>> {
        let primary = self.fonts.primary().ok_or(Error::MissingFont)?;
        let font_px = self.state.font_px;
        let mut caret = x;
        let mut masks = Vec::new();

        for ch in text.chars() {
            let Some(face) = self.fonts.face_for(ch) else {
                log::trace!("no face has {:?}, skipping", ch);
                let scale = Self::px_scale(primary, font_px);
                caret += primary.as_scaled(scale).h_advance(GlyphId(0));
                continue;
            };
            let scale = Self::px_scale(face, font_px);
            let scaled = face.as_scaled(scale);
            let id = scaled.glyph_id(ch);
            let glyph = id.with_scale_and_position(scale, point(caret, y));
            caret += scaled.h_advance(id);
            if let Some(outlined) = face.outline_glyph(glyph) {
                masks.push(GlyphMask::rasterize(&outlined));
            }
        }
        Ok(masks)
    }

    /// Blend a glyph mask into the image through the current transform
    ///
    /// Only the canvas box under the transformed mask is warped, with bilinear
    /// sampling so rotated glyphs keep smooth edges.
    fn composite(&mut self, glyph: &GlyphMask) {
        let (mask_w, mask_h) = glyph.mask.dimensions();
        let transform = self.state.transform;
        let right = glyph.left + mask_w as f32;
        let bottom = glyph.top + mask_h as f32;
        let corners = [
            transform * (glyph.left, glyph.top),
            transform * (right, glyph.top),
            transform * (glyph.left, bottom),
            transform * (right, bottom),
        ];

        let (img_w, img_h) = self.image.dimensions();
        let Some((x0, y0, x1, y1)) = pixel_bounds(&corners, img_w, img_h) else {
            return;
        };

        // Mask pixel centers to box pixel centers
        let projection = Projection::translate(-(x0 as f32) - 0.5, -(y0 as f32) - 0.5)
            * transform
            * Projection::translate(glyph.left + 0.5, glyph.top + 0.5);
        let mut coverage = GrayImage::new(x1 - x0, y1 - y0);
        warp_into(&glyph.mask, &projection, Interpolation::Bilinear, Luma([0]), &mut coverage);

        let fill = self.state.fill;
        let alpha = fill[3] as f32 / 255.0;
        for (bx, by, value) in coverage.enumerate_pixels() {
            let c = value[0] as f32 / 255.0 * alpha;
            if c <= 0.0 {
                continue;
            }
            let (px, py) = (x0 + bx, y0 + by);
            let below = *self.image.get_pixel(px, py);
            let mut blended = interpolate(fill, below, c);
            // Coverage accumulates opacity like source-over
            blended[3] = (fill[3] as f32 * c + below[3] as f32 * (1.0 - c)).round() as u8;
            self.image.put_pixel(px, py, blended);
        }
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let transform = self.state.transform;
        let fill = self.state.fill;
        let corners = [
            transform * (x, y),
            transform * (x + width, y),
            transform * (x + width, y + height),
            transform * (x, y + height),
        ];

        let aligned = |a: f32, b: f32| (a - b).abs() < 1e-3;
        let axis_aligned = (aligned(corners[0].1, corners[1].1) && aligned(corners[0].0, corners[3].0))
            || (aligned(corners[0].0, corners[1].0) && aligned(corners[0].1, corners[3].1));

        if axis_aligned {
            let min_x = corners.iter().map(|c| c.0).fold(f32::INFINITY, f32::min).round();
            let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min).round();
            let max_x = corners.iter().map(|c| c.0).fold(f32::NEG_INFINITY, f32::max).round();
            let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max).round();
            let rect = Rect::at(min_x as i32, min_y as i32)
                .of_size((max_x - min_x).max(1.0) as u32, (max_y - min_y).max(1.0) as u32);
            draw_filled_rect_mut(&mut self.image, rect, fill);
        } else {
            let polygon: Vec<Point<i32>> = corners
                .iter()
                .map(|&(cx, cy)| Point::new(cx.round() as i32, cy.round() as i32))
                .collect();
            draw_polygon_mut(&mut self.image, &polygon, fill);
        }
    }

    fn set_fill_style(&mut self, color: &str) -> Result<()> {
        self.state.fill = parse_color(color).ok_or_else(|| Error::InvalidColor(color.to_string()))?;
        Ok(())
    }

    fn set_font(&mut self, size_px: f32) -> Result<()> {
        if !(size_px > 0.0 && size_px.is_finite()) {
            return Err(Error::InvalidFontSize(size_px));
        }
        self.state.font_px = size_px;
        Ok(())
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform * Projection::translate(x, y);
    }

    fn rotate(&mut self, angle: f32) {
        self.state.transform = self.state.transform * Projection::rotate(angle);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<()> {
        for glyph in self.layout(text, x, y)? {
            self.composite(&glyph);
        }
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }
}
