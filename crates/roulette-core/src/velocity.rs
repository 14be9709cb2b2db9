//! Angular velocity tracking over a short sliding window.
//!
//! Ring buffer of per-move rotation deltas with an impulse-based velocity
//! estimate. Only samples from the last 100 ms count; a gap longer than
//! 40 ms means the pointer stopped and everything older is discarded.

const HISTORY_SIZE: usize = 20;
const HORIZON_MS: u64 = 100;
const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: u64,
    delta_deg: f64,
}

/// Tracks rotation deltas produced by drag moves and estimates the release
/// velocity in degrees per second.
#[derive(Clone, Default)]
pub struct AngularVelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl AngularVelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the rotation delta a drag move produced at `time_ms`.
    pub fn add_sample(&mut self, time_ms: u64, delta_deg: f64) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, delta_deg });
    }

    /// Velocity in degrees/second over the recent window.
    ///
    /// Returns 0.0 with fewer than two usable samples.
    pub fn velocity_deg_per_sec(&self) -> f64 {
        let mut deltas = [0.0f64; HISTORY_SIZE];
        let mut times = [0.0f64; HISTORY_SIZE];

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        // Walk backwards from the newest sample, keeping everything inside
        // the horizon and stopping at the first stationary gap.
        let mut count = 0;
        let mut idx = self.index;
        let mut previous_time = newest.time_ms;
        while let Some(sample) = self.samples[idx] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous_time.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time = sample.time_ms;
            deltas[count] = sample.delta_deg;
            times[count] = -(age as f64);
            idx = if idx == 0 { HISTORY_SIZE - 1 } else { idx - 1 };
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&deltas[..count], &times[..count]) * 1000.0
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Impulse-strategy velocity over differential samples ordered newest
/// first, with times as negative ages in milliseconds. Accumulates the
/// kinetic energy each interval imparts and converts it back to a speed.
fn impulse_velocity(deltas: &[f64], times: &[f64]) -> f64 {
    let mut work = 0.0f64;
    let start = deltas.len() - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        // The newer sample's delta spans this interval.
        let v_curr = -deltas[i - 1] / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1, signed.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f64) -> f64 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        assert_eq!(AngularVelocityTracker::new().velocity_deg_per_sec(), 0.0);
    }

    #[test]
    fn single_sample_returns_zero() {
        let mut tracker = AngularVelocityTracker::new();
        tracker.add_sample(0, 5.0);
        assert_eq!(tracker.velocity_deg_per_sec(), 0.0);
    }

    #[test]
    fn constant_velocity_recovered() {
        let mut tracker = AngularVelocityTracker::new();
        // 2 degrees every 10 ms = 200 deg/s.
        for i in 0..4 {
            tracker.add_sample(i * 10, 2.0);
        }
        let velocity = tracker.velocity_deg_per_sec();
        assert!(
            (velocity - 200.0).abs() < 20.0,
            "expected ~200 deg/s, got {velocity}"
        );
    }

    #[test]
    fn negative_direction_gives_negative_velocity() {
        let mut tracker = AngularVelocityTracker::new();
        for i in 0..4 {
            tracker.add_sample(i * 10, -3.0);
        }
        assert!(tracker.velocity_deg_per_sec() < 0.0);
    }

    #[test]
    fn samples_beyond_horizon_are_ignored() {
        let mut tracker = AngularVelocityTracker::new();
        tracker.add_sample(0, 90.0); // stale, outside the 100 ms window
        tracker.add_sample(150, 2.0);
        tracker.add_sample(160, 2.0);
        tracker.add_sample(170, 2.0);
        let velocity = tracker.velocity_deg_per_sec();
        assert!(
            (velocity - 200.0).abs() < 20.0,
            "stale sample leaked into the estimate: {velocity}"
        );
    }

    #[test]
    fn stationary_gap_discards_older_samples() {
        let mut tracker = AngularVelocityTracker::new();
        tracker.add_sample(0, 2.0);
        tracker.add_sample(ASSUME_STOPPED_MS + 1, 2.0);
        // Only the newest survives the gap check -> not enough samples.
        assert_eq!(tracker.velocity_deg_per_sec(), 0.0);
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = AngularVelocityTracker::new();
        tracker.add_sample(0, 2.0);
        tracker.add_sample(10, 2.0);
        tracker.reset();
        assert_eq!(tracker.velocity_deg_per_sec(), 0.0);
    }
}
