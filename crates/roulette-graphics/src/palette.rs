//! Fixed sector palette.
//!
//! Colors repeat every 18 sectors, so a sector keeps a stable-looking color
//! across redraws but not an identity-preserving one across removals.

use crate::color::Color;

pub const SECTOR_PALETTE: [Color; 18] = [
    Color::from_rgb_u8(0xF4, 0x43, 0x36),
    Color::from_rgb_u8(0xE9, 0x1E, 0x63),
    Color::from_rgb_u8(0x9C, 0x27, 0xB0),
    Color::from_rgb_u8(0x67, 0x3A, 0xB7),
    Color::from_rgb_u8(0x3F, 0x51, 0xB5),
    Color::from_rgb_u8(0x21, 0x96, 0xF3),
    Color::from_rgb_u8(0x03, 0xA9, 0xF4),
    Color::from_rgb_u8(0x00, 0xBC, 0xD4),
    Color::from_rgb_u8(0x00, 0x96, 0x88),
    Color::from_rgb_u8(0x4C, 0xAF, 0x50),
    Color::from_rgb_u8(0x8B, 0xC3, 0x4A),
    Color::from_rgb_u8(0xCD, 0xDC, 0x39),
    Color::from_rgb_u8(0xFF, 0xEB, 0x3B),
    Color::from_rgb_u8(0xFF, 0xC1, 0x07),
    Color::from_rgb_u8(0xFF, 0x98, 0x00),
    Color::from_rgb_u8(0xFF, 0x57, 0x22),
    Color::from_rgb_u8(0x79, 0x55, 0x48),
    Color::from_rgb_u8(0x60, 0x7D, 0x8B),
];

/// Color for the sector at `index`, cycling through the palette.
pub fn sector_color(index: usize) -> Color {
    SECTOR_PALETTE[index % SECTOR_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(sector_color(0), sector_color(18));
        assert_eq!(sector_color(5), sector_color(23));
        assert_ne!(sector_color(0), sector_color(1));
    }
}
