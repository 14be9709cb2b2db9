//! Maps a final rotation to the winning sector index.

use roulette_graphics::{normalize_deg, FULL_TURN_DEG};

use crate::error::WheelError;

/// The fixed on-screen pointer sits at 12 o'clock: 270 degrees in the
/// clockwise-from-3-o'clock convention the draw step uses.
pub const POINTER_DEG: f64 = 270.0;

/// Index of the sector under the pointer after the wheel stopped at
/// `final_rotation` degrees.
///
/// The result is clamped to `[0, item_count - 1]`: a rotation landing
/// exactly on the 360/0 seam can float a hair past the last sector bound
/// and must still resolve to a real index.
pub fn resolve_winner(final_rotation: f64, item_count: usize) -> Result<usize, WheelError> {
    if item_count == 0 {
        return Err(WheelError::EmptyWheel);
    }
    let degrees_per_item = FULL_TURN_DEG / item_count as f64;
    let effective_angle = normalize_deg(POINTER_DEG - final_rotation);
    let index = (effective_angle / degrees_per_item).floor() as usize;
    Ok(index.min(item_count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wheel_is_an_error() {
        assert_eq!(resolve_winner(123.0, 0), Err(WheelError::EmptyWheel));
    }

    #[test]
    fn single_item_always_wins() {
        for rotation in [-720.0, -45.0, 0.0, 1.5, 270.0, 359.999, 9000.0] {
            assert_eq!(resolve_winner(rotation, 1), Ok(0));
        }
    }

    #[test]
    fn four_item_scenarios() {
        // 4 items, 90 degrees each: A=0..90, B=90..180, C=180..270, D=270..360.
        assert_eq!(resolve_winner(0.0, 4), Ok(3)); // effective 270 -> "D"
        assert_eq!(resolve_winner(270.0, 4), Ok(0)); // effective 0 -> "A"
        assert_eq!(resolve_winner(45.0, 4), Ok(2)); // effective 225 -> "C"
    }

    #[test]
    fn zero_rotation_pointer_sits_on_item_start() {
        for n in 1..=50 {
            assert_eq!(resolve_winner(270.0, n), Ok(0));
        }
    }

    #[test]
    fn index_stays_in_range_for_any_rotation() {
        for n in 1..=50usize {
            for step in -100..=100 {
                let rotation = step as f64 * 17.31;
                let index = resolve_winner(rotation, n).unwrap();
                assert!(index < n, "index {index} out of range for {n} items");
            }
        }
    }

    #[test]
    fn resolution_is_periodic_in_full_turns() {
        for n in [1, 2, 3, 7, 12, 50] {
            for k in [-3i32, -1, 1, 2, 10] {
                let base = 123.456;
                assert_eq!(
                    resolve_winner(base, n),
                    resolve_winner(base + 360.0 * k as f64, n),
                );
            }
        }
    }

    #[test]
    fn just_below_seam_resolves_to_last_sector() {
        // An effective angle a hair below 360 must floor into the last
        // sector, never into item_count.
        let rotation = 270.0 - 359.999_999_999;
        let index = resolve_winner(rotation, 6).unwrap();
        assert_eq!(index, 5);
    }
}
