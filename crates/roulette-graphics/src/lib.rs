//! Graphics primitives shared by the wheel core and the renderers.
//!
//! Everything in here is a pure function of its inputs: colors, points and
//! the angular layout of the sector disc. No drawing happens in this crate.

mod color;
mod geometry;
mod palette;

pub use color::Color;
pub use geometry::{
    degrees_per_sector, normalize_deg, pointer_angle_deg, sector_arcs, Point, SectorArc, Size,
    FULL_TURN_DEG,
};
pub use palette::{sector_color, SECTOR_PALETTE};
