//! Pixel-level primitives: alpha blending, glyph rasterization, text
//! measurement.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use once_cell::sync::Lazy;
use roulette_graphics::Color;
use rusttype::{point, Font, Scale};

static FONT: Lazy<Font<'static>> = Lazy::new(|| {
    Font::try_from_bytes(
        include_bytes!("../../../apps/desktop/assets/DejaVuSans.ttf") as &[u8]
    )
    .expect("font")
});

static TEXT_WIDTH_CACHE: Lazy<Mutex<LruCache<(String, u32), f32>>> =
    Lazy::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(256).unwrap())));

/// Fills the whole frame with an opaque color.
pub fn clear_frame(frame: &mut [u8], color: Color) {
    let rgba = color.to_rgba8();
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&rgba);
    }
}

/// Blends a single pixel into the frame. `alpha` multiplies the color's own
/// alpha channel.
pub(crate) fn blend_pixel(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: Color,
    alpha: f32,
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let a = (color.a() * alpha).clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let idx = ((y as u32 * width + x as u32) * 4) as usize;
    let existing = &mut frame[idx..idx + 4];
    let src = [color.r(), color.g(), color.b()];
    for i in 0..3 {
        let dst = existing[i] as f32 / 255.0;
        let blended = src[i] * a + dst * (1.0 - a);
        existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    let dst_a = existing[3] as f32 / 255.0;
    let out_a = a + dst_a * (1.0 - a);
    existing[3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
}

/// Blends an axis-aligned rectangle into the frame.
pub fn fill_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Color,
) {
    for py in y..y + h as i32 {
        for px in x..x + w as i32 {
            blend_pixel(frame, width, height, px, py, color, 1.0);
        }
    }
}

/// Width in pixels of `text` at `size`, memoized behind an LRU cache since
/// the same labels are measured on every HUD repaint.
pub fn text_width(text: &str, size: f32) -> f32 {
    let key = (text.to_string(), size.to_bits());
    if let Some(width) = TEXT_WIDTH_CACHE
        .lock()
        .expect("text width cache poisoned")
        .get(&key)
        .copied()
    {
        return width;
    }
    let width = measure_width(text, size);
    TEXT_WIDTH_CACHE
        .lock()
        .expect("text width cache poisoned")
        .put(key, width);
    width
}

fn measure_width(text: &str, size: f32) -> f32 {
    let scale = Scale::uniform(size);
    let v_metrics = FONT.v_metrics(scale);
    let origin = point(0.0, v_metrics.ascent);
    let mut max_x = 0.0f32;
    for glyph in FONT.layout(text, scale, origin) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            max_x = max_x.max(bb.max.x as f32);
        }
    }
    max_x
}

/// Draws `text` with its left edge at `x` and its baseline derived from
/// `y` as the top of the line.
pub fn draw_text(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: f32,
    y: f32,
    text: &str,
    size: f32,
    color: Color,
) {
    let scale = Scale::uniform(size);
    let v_metrics = FONT.v_metrics(scale);
    let offset = point(x, y + v_metrics.ascent);
    for glyph in FONT.layout(text, scale, offset) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                blend_pixel(frame, width, height, px, py, color, coverage);
            });
        }
    }
}

/// Draws `text` centered on `(cx, cy)`.
pub fn draw_text_centered(
    frame: &mut [u8],
    width: u32,
    height: u32,
    cx: f32,
    cy: f32,
    text: &str,
    size: f32,
    color: Color,
) {
    let text_w = text_width(text, size);
    let scale = Scale::uniform(size);
    let v_metrics = FONT.v_metrics(scale);
    let line_h = v_metrics.ascent - v_metrics.descent;
    draw_text(
        frame,
        width,
        height,
        cx - text_w / 2.0,
        cy - line_h / 2.0,
        text,
        size,
        color,
    );
}

/// A label rasterized into a standalone coverage buffer, ready to be
/// blitted under an arbitrary rotation.
pub(crate) struct LabelRaster {
    pub coverage: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

pub(crate) fn raster_label(text: &str, size: f32) -> LabelRaster {
    let scale = Scale::uniform(size);
    let v_metrics = FONT.v_metrics(scale);
    let width = measure_width(text, size).ceil() as usize + 2;
    let height = (v_metrics.ascent - v_metrics.descent).ceil() as usize + 2;
    let mut coverage = vec![0.0f32; width * height];

    let origin = point(1.0, 1.0 + v_metrics.ascent);
    for glyph in FONT.layout(text, scale, origin) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, value| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px >= 0 && py >= 0 && (px as usize) < width && (py as usize) < height {
                    let slot = &mut coverage[py as usize * width + px as usize];
                    *slot = slot.max(value);
                }
            });
        }
    }

    LabelRaster {
        coverage,
        width,
        height,
    }
}

impl LabelRaster {
    /// Nearest-neighbor coverage sample; out-of-bounds reads are empty.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let xi = x.round() as i32;
        let yi = y.round() as i32;
        if xi < 0 || yi < 0 || xi as usize >= self.width || yi as usize >= self.height {
            return 0.0;
        }
        self.coverage[yi as usize * self.width + xi as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_is_positive_and_memoized() {
        let first = text_width("Banana", 16.0);
        let second = text_width("Banana", 16.0);
        assert!(first > 0.0);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_text_has_zero_width() {
        assert_eq!(text_width("", 16.0), 0.0);
    }

    #[test]
    fn label_raster_covers_some_pixels() {
        let raster = raster_label("X", 16.0);
        assert!(raster.width > 0 && raster.height > 0);
        assert!(raster.coverage.iter().any(|&c| c > 0.5));
    }

    #[test]
    fn blend_ignores_out_of_bounds() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        blend_pixel(&mut frame, 4, 4, -1, 0, Color::WHITE, 1.0);
        blend_pixel(&mut frame, 4, 4, 4, 0, Color::WHITE, 1.0);
        blend_pixel(&mut frame, 4, 4, 0, 9, Color::WHITE, 1.0);
        assert!(frame.iter().all(|&b| b == 0));
    }
}
