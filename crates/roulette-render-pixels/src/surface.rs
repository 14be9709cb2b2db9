//! The offscreen wheel surface and its rotated blit.

use log::debug;
use roulette_graphics::{
    degrees_per_sector, normalize_deg, sector_arcs, sector_color, Color, Point, FULL_TURN_DEG,
};

use crate::draw::{blend_pixel, raster_label};

/// Side of the square logical canvas the wheel is rasterized into.
pub const CANVAS_SIZE: u32 = 500;

/// Margin between the disc and the canvas edge.
const RIM_MARGIN: f32 = 10.0;
/// Labels end this far inside the rim, right-aligned along the bisector.
const LABEL_INSET: f32 = 20.0;
const LABEL_SIZE: f32 = 16.0;
const LABEL_COLOR: Color = Color::WHITE;
const DIVIDER_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.55);
const POINTER_COLOR: Color = Color::from_rgb_u8(0xE6, 0xE6, 0xE6);

/// Offscreen RGBA raster of the unrotated sector disc.
///
/// `render_sectors` is the expensive path and runs only when the item list
/// changes; `blit_rotated` runs every frame and applies the rotation as a
/// pure sampling transform.
pub struct WheelSurface {
    size: u32,
    base: Vec<u8>,
}

impl WheelSurface {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            base: vec![0u8; (size * size * 4) as usize],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Disc center in surface coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.size as f32 / 2.0, self.size as f32 / 2.0)
    }

    pub fn radius(&self) -> f32 {
        self.size as f32 / 2.0 - RIM_MARGIN
    }

    /// Whether a surface-local position falls on the disc. Used to decide
    /// if a pointer press starts a drag.
    pub fn contains(&self, pos: Point) -> bool {
        let center = self.center();
        let dx = pos.x - center.x;
        let dy = pos.y - center.y;
        dx * dx + dy * dy <= self.radius() * self.radius()
    }

    /// Repaints the sector disc for a new item list.
    ///
    /// An empty list produces an empty (fully transparent) surface; the
    /// caller is expected to prevent spinning, not drawing.
    pub fn render_sectors(&mut self, labels: &[String]) {
        self.base.fill(0);

        let Some(step_deg) = degrees_per_sector(labels.len()) else {
            debug!("wheel surface cleared: no items");
            return;
        };

        self.paint_wedges(labels.len(), step_deg);
        for arc in sector_arcs(labels.len()) {
            self.paint_label(&labels[arc.index], arc.bisector_deg());
        }
        debug!("wheel surface rasterized for {} sectors", labels.len());
    }

    fn paint_wedges(&mut self, count: usize, step_deg: f64) {
        let center = self.center();
        let radius = self.radius() as f64;
        let size = self.size;

        for py in 0..size as i32 {
            for px in 0..size as i32 {
                let dx = (px as f32 + 0.5 - center.x) as f64;
                let dy = (py as f32 + 0.5 - center.y) as f64;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius + 1.0 {
                    continue;
                }

                // Anti-alias the rim over its last pixel.
                let rim_alpha = (radius + 1.0 - dist).clamp(0.0, 1.0);

                let angle = normalize_deg(dy.atan2(dx).to_degrees());
                let sector = ((angle / step_deg) as usize).min(count - 1);
                let color = sector_color(sector);
                blend_pixel(
                    &mut self.base,
                    size,
                    size,
                    px,
                    py,
                    color,
                    rim_alpha as f32,
                );

                // Divider lines between sectors: distance from the pixel to
                // the nearest boundary ray, in pixels.
                let offset_deg = angle - sector as f64 * step_deg;
                let to_boundary_deg = offset_deg.min(step_deg - offset_deg);
                let boundary_px = dist * to_boundary_deg.to_radians();
                if boundary_px < 1.0 && dist > 4.0 {
                    let alpha = (1.0 - boundary_px) as f32;
                    blend_pixel(&mut self.base, size, size, px, py, DIVIDER_COLOR, alpha);
                }
            }
        }
    }

    /// Paints one label radially: right-aligned, ending `LABEL_INSET`
    /// inside the rim, rotated to the sector's bisector.
    fn paint_label(&mut self, label: &str, bisector_deg: f64) {
        if label.is_empty() {
            return;
        }
        let raster = raster_label(label, LABEL_SIZE);
        let center = self.center();
        let size = self.size;

        let theta = bisector_deg.to_radians();
        let (sin_t, cos_t) = theta.sin_cos();

        // Local text space: x along the bisector, right edge at
        // radius - LABEL_INSET, y across the baseline.
        let end_x = self.radius() - LABEL_INSET;
        let start_x = end_x - raster.width as f32;
        let top_y = -(raster.height as f32) / 2.0;

        // Inverse-map the rotated bounding box so rotation leaves no holes.
        let corners = [
            (start_x, top_y),
            (end_x, top_y),
            (start_x, -top_y),
            (end_x, -top_y),
        ];
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for (lx, ly) in corners {
            let sx = center.x + lx * cos_t as f32 - ly * sin_t as f32;
            let sy = center.y + lx * sin_t as f32 + ly * cos_t as f32;
            min_x = min_x.min(sx);
            max_x = max_x.max(sx);
            min_y = min_y.min(sy);
            max_y = max_y.max(sy);
        }

        for py in min_y.floor() as i32..=max_y.ceil() as i32 {
            for px in min_x.floor() as i32..=max_x.ceil() as i32 {
                let sx = px as f32 + 0.5 - center.x;
                let sy = py as f32 + 0.5 - center.y;
                // Rotate back into text space.
                let lx = sx * cos_t as f32 + sy * sin_t as f32;
                let ly = -sx * sin_t as f32 + sy * cos_t as f32;
                let coverage = raster.sample(lx - start_x, ly - top_y);
                if coverage > 0.0 {
                    blend_pixel(&mut self.base, size, size, px, py, LABEL_COLOR, coverage);
                }
            }
        }
    }

    /// Blits the disc into `frame` at `(origin_x, origin_y)` rotated by
    /// `rotation_deg` around its center.
    pub fn blit_rotated(
        &self,
        frame: &mut [u8],
        frame_w: u32,
        frame_h: u32,
        origin_x: i32,
        origin_y: i32,
        rotation_deg: f64,
    ) {
        let center = self.center();
        let theta = (rotation_deg % FULL_TURN_DEG).to_radians();
        let (sin_t, cos_t) = theta.sin_cos();
        let size = self.size as i32;

        for py in 0..size {
            for px in 0..size {
                let dx = px as f64 + 0.5 - center.x as f64;
                let dy = py as f64 + 0.5 - center.y as f64;
                // Inverse rotation: which base pixel lands here.
                let sx = center.x as f64 + dx * cos_t + dy * sin_t;
                let sy = center.y as f64 - dx * sin_t + dy * cos_t;
                let sxi = sx.floor() as i32;
                let syi = sy.floor() as i32;
                if sxi < 0 || syi < 0 || sxi >= size || syi >= size {
                    continue;
                }
                let idx = ((syi * size + sxi) * 4) as usize;
                let a = self.base[idx + 3];
                if a == 0 {
                    continue;
                }
                let color = Color::rgba(
                    self.base[idx] as f32 / 255.0,
                    self.base[idx + 1] as f32 / 255.0,
                    self.base[idx + 2] as f32 / 255.0,
                    1.0,
                );
                blend_pixel(
                    frame,
                    frame_w,
                    frame_h,
                    origin_x + px,
                    origin_y + py,
                    color,
                    a as f32 / 255.0,
                );
            }
        }
    }

    /// Draws the fixed pointer marker at 12 o'clock, tip reaching into the
    /// disc.
    pub fn draw_pointer(&self, frame: &mut [u8], frame_w: u32, frame_h: u32, origin_x: i32, origin_y: i32) {
        let center = self.center();
        let top = center.y - self.radius();
        let tip = (center.x, top + 26.0);
        let left = (center.x - 13.0, top - 8.0);
        let right = (center.x + 13.0, top - 8.0);
        fill_triangle(
            frame,
            frame_w,
            frame_h,
            (origin_x as f32 + tip.0, origin_y as f32 + tip.1),
            (origin_x as f32 + left.0, origin_y as f32 + left.1),
            (origin_x as f32 + right.0, origin_y as f32 + right.1),
            POINTER_COLOR,
        );
    }
}

/// Fills a triangle with an edge-function coverage test.
fn fill_triangle(
    frame: &mut [u8],
    frame_w: u32,
    frame_h: u32,
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
    color: Color,
) {
    let min_x = a.0.min(b.0).min(c.0).floor() as i32;
    let max_x = a.0.max(b.0).max(c.0).ceil() as i32;
    let min_y = a.1.min(b.1).min(c.1).floor() as i32;
    let max_y = a.1.max(b.1).max(c.1).ceil() as i32;

    let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| {
        (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
    };
    let area = edge(a, b, c.0, c.1);
    if area == 0.0 {
        return;
    }

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let x = px as f32 + 0.5;
            let y = py as f32 + 0.5;
            let w0 = edge(a, b, x, y) / area;
            let w1 = edge(b, c, x, y) / area;
            let w2 = edge(c, a, x, y) / area;
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                blend_pixel(frame, frame_w, frame_h, px, py, color, 1.0);
            }
        }
    }
}
