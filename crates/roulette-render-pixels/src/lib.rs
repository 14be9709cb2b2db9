//! CPU rendering of the wheel into an RGBA frame buffer.
//!
//! The sector disc (wedges + radial labels) is rasterized once into an
//! offscreen surface whenever the item list changes; every frame that
//! surface is blitted into the output with the current rotation applied as
//! a transform of the whole surface. Sector content and rotation stay
//! independent, so a spin never re-runs text layout.

mod draw;
mod surface;

pub use draw::{clear_frame, draw_text, draw_text_centered, fill_rect, text_width};
pub use surface::{WheelSurface, CANVAS_SIZE};
