//! Time-based spin animation with cooperative cancellation.

use log::debug;
use roulette_graphics::FULL_TURN_DEG;

use crate::easing::Easing;

/// Fixed length of every spin.
pub const SPIN_DURATION_MS: u64 = 5_000;
/// Randomized full turns per spin fall in `[MIN_TURNS, MAX_TURNS)`.
pub const MIN_TURNS: f64 = 5.0;
pub const MAX_TURNS: f64 = 10.0;

/// Parameters a spin is planned from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSpec {
    pub min_turns: f64,
    pub max_turns: f64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl SpinSpec {
    /// Number of turns for a unit sample in `[0, 1)`.
    pub fn turns_from_unit(&self, unit_sample: f64) -> f64 {
        let unit = unit_sample.clamp(0.0, 1.0);
        self.min_turns + unit * (self.max_turns - self.min_turns)
    }
}

impl Default for SpinSpec {
    fn default() -> Self {
        Self {
            min_turns: MIN_TURNS,
            max_turns: MAX_TURNS,
            duration_ms: SPIN_DURATION_MS,
            easing: Easing::EaseOutCubic,
        }
    }
}

/// One planned spin: where it starts, where it must stop, and how long it
/// takes. Created at spin start, sampled every frame, discarded when done.
#[derive(Debug, Clone, Copy)]
pub struct SpinPlan {
    start_rotation: f64,
    target_rotation: f64,
    /// Bound lazily to the first frame timestamp, like the rest of the
    /// animation stack: the plan does not read a clock of its own.
    start_time_ms: Option<u64>,
    duration_ms: u64,
    easing: Easing,
}

impl SpinPlan {
    /// Plans a spin of `spec.turns_from_unit(unit_sample)` full turns past
    /// `start_rotation`.
    pub fn randomized(start_rotation: f64, spec: &SpinSpec, unit_sample: f64) -> Self {
        let turns = spec.turns_from_unit(unit_sample);
        Self {
            start_rotation,
            target_rotation: start_rotation + turns * FULL_TURN_DEG,
            start_time_ms: None,
            duration_ms: spec.duration_ms.max(1),
            easing: spec.easing,
        }
    }

    pub fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    /// Rotation at `now_ms` plus whether the plan has run its duration.
    ///
    /// The finished rotation is exactly the target, with no interpolation
    /// residue.
    fn sample(&mut self, now_ms: u64) -> (f64, bool) {
        let start_time = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start_time);
        let linear = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        if linear >= 1.0 {
            return (self.target_rotation, true);
        }
        let eased = self.easing.transform(linear);
        let rotation =
            self.start_rotation + (self.target_rotation - self.start_rotation) * eased;
        (rotation, false)
    }
}

/// What a frame tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameUpdate {
    /// The frame belonged to a superseded or finished spin; nothing
    /// happened.
    Stale,
    /// The spin moved to this rotation and keeps going.
    Rotation(f64),
    /// The spin reached its target; no further frames will be delivered.
    Finished(f64),
}

/// Drives at most one spin at a time.
///
/// Each started spin gets a generation number; frames must present the
/// generation they were scheduled for. A frame whose generation no longer
/// matches (its spin was superseded or canceled) is a no-op, which is what
/// keeps two animation loops from ever racing over the rotation.
#[derive(Debug, Default)]
pub struct SpinAnimator {
    plan: Option<SpinPlan>,
    generation: u64,
}

impl SpinAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.plan.is_some()
    }

    /// Generation of the currently active spin; frames scheduled for older
    /// generations will be ignored.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a spin from `start_rotation`, superseding any in-flight one.
    /// Returns the generation the caller must tag its frames with.
    pub fn start(&mut self, start_rotation: f64, spec: &SpinSpec, unit_sample: f64) -> u64 {
        let plan = SpinPlan::randomized(start_rotation, spec, unit_sample);
        self.generation = self.generation.wrapping_add(1);
        debug!(
            "spin {} started: {:.1} -> {:.1} deg over {} ms",
            self.generation,
            start_rotation,
            plan.target_rotation(),
            spec.duration_ms,
        );
        self.plan = Some(plan);
        self.generation
    }

    /// Cancels the in-flight spin, if any. Its completion never fires.
    pub fn cancel(&mut self) {
        if self.plan.take().is_some() {
            debug!("spin {} canceled", self.generation);
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advances the spin tagged `generation` to `now_ms`.
    ///
    /// `Finished` is returned exactly once per spin; the plan is dropped
    /// with it, so a late duplicate frame degrades to `Stale`.
    pub fn frame(&mut self, generation: u64, now_ms: u64) -> FrameUpdate {
        if generation != self.generation {
            return FrameUpdate::Stale;
        }
        let plan = match self.plan.as_mut() {
            Some(plan) => plan,
            None => return FrameUpdate::Stale,
        };
        let (rotation, finished) = plan.sample(now_ms);
        if finished {
            self.plan = None;
            FrameUpdate::Finished(rotation)
        } else {
            FrameUpdate::Rotation(rotation)
        }
    }
}

#[cfg(test)]
#[path = "tests/spin_tests.rs"]
mod tests;
