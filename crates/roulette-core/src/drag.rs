//! Converts pointer gestures into rotation deltas.

use roulette_graphics::{pointer_angle_deg, Point};

use crate::velocity::AngularVelocityTracker;

/// Tracks an active drag: last pointer angle, last move time, and the
/// velocity window.
///
/// The tracker knows nothing about what the rotation is used for; it hands
/// back wrap-corrected deltas and lets the caller accumulate them.
#[derive(Clone, Default)]
pub struct DragTracker {
    active: bool,
    last_angle_deg: f64,
    last_time_ms: u64,
    velocity: AngularVelocityTracker,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts tracking at the given pointer position.
    pub fn begin(&mut self, pos: Point, center: Point, now_ms: u64) {
        self.active = true;
        self.last_angle_deg = pointer_angle_deg(pos, center);
        self.last_time_ms = now_ms;
        self.velocity.reset();
    }

    /// Processes a pointer move, returning the rotation delta it produced.
    ///
    /// Crossing the atan2 seam (e.g. 179 to -179 degrees) yields a raw
    /// delta of -358; the shortest-path correction turns it into +2 so the
    /// wheel never snaps the long way around. Returns `None` when no drag
    /// is active.
    pub fn move_to(&mut self, pos: Point, center: Point, now_ms: u64) -> Option<f64> {
        if !self.active {
            return None;
        }

        let angle = pointer_angle_deg(pos, center);
        let mut delta = angle - self.last_angle_deg;
        if delta > 180.0 {
            delta -= 360.0;
        }
        if delta < -180.0 {
            delta += 360.0;
        }

        if now_ms > self.last_time_ms {
            self.velocity.add_sample(now_ms, delta);
        }

        self.last_angle_deg = angle;
        self.last_time_ms = now_ms;
        Some(delta)
    }

    /// Ends the drag, returning the measured release velocity in
    /// degrees/second, or `None` when no drag was active.
    ///
    /// The release behavior itself (always a fixed randomized spin) does
    /// not consume the velocity; it is reported for callers that want to
    /// log or inspect it.
    pub fn finish(&mut self, _now_ms: u64) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.active = false;
        let release_velocity = self.velocity.velocity_deg_per_sec();
        self.velocity.reset();
        Some(release_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(250.0, 250.0);

    fn at_angle(deg: f64) -> Point {
        let rad = deg.to_radians();
        Point::new(
            CENTER.x + 100.0 * rad.cos() as f32,
            CENTER.y + 100.0 * rad.sin() as f32,
        )
    }

    #[test]
    fn move_without_begin_is_ignored() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.move_to(at_angle(10.0), CENTER, 5), None);
        assert_eq!(drag.finish(6), None);
    }

    #[test]
    fn small_move_yields_its_delta() {
        let mut drag = DragTracker::new();
        drag.begin(at_angle(30.0), CENTER, 0);
        let delta = drag.move_to(at_angle(42.0), CENTER, 16).unwrap();
        assert!((delta - 12.0).abs() < 0.01, "delta was {delta}");
    }

    #[test]
    fn seam_crossing_takes_the_short_path() {
        let mut drag = DragTracker::new();
        drag.begin(at_angle(179.0), CENTER, 0);
        // Raw delta is -358; corrected it must be +2.
        let delta = drag.move_to(at_angle(-179.0), CENTER, 16).unwrap();
        assert!((delta - 2.0).abs() < 0.01, "delta was {delta}");

        // And the mirror image: -179 -> 179 is -2, not +358.
        let delta = drag.move_to(at_angle(179.0), CENTER, 32).unwrap();
        assert!((delta + 2.0).abs() < 0.01, "delta was {delta}");
    }

    #[test]
    fn finish_reports_release_velocity() {
        let mut drag = DragTracker::new();
        drag.begin(at_angle(0.0), CENTER, 0);
        // Steady clockwise motion, 5 degrees every 10 ms.
        for i in 1..=6u64 {
            drag.move_to(at_angle(5.0 * i as f64), CENTER, i * 10);
        }
        let velocity = drag.finish(70).unwrap();
        assert!(
            (velocity - 500.0).abs() < 60.0,
            "expected ~500 deg/s, got {velocity}"
        );
        assert!(!drag.is_active());
    }
}
