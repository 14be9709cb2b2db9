//! The wheel facade: rotation state, animator, and drag tracker wired
//! together behind the surface the host application talks to.

use log::{debug, info, warn};
use roulette_graphics::Point;

use crate::drag::DragTracker;
use crate::error::WheelError;
use crate::resolver::resolve_winner;
use crate::rotation::RotationState;
use crate::spin::{FrameUpdate, SpinAnimator, SpinSpec};

/// The label that ended up under the pointer. Handed out once per
/// completed spin and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerResult {
    pub index: usize,
    pub label: String,
}

/// What one frame tick did to the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// Absolute rotation after the tick, for the draw step.
    pub rotation_deg: f64,
    /// Set exactly once, on the frame that completed a spin.
    pub winner: Option<WinnerResult>,
}

/// A spinnable wheel of labeled sectors.
///
/// Owns the rotation state exclusively; the host forwards pointer events
/// and frame timestamps and redraws from `rotation_deg()`.
pub struct Wheel {
    labels: Vec<String>,
    rotation: RotationState,
    animator: SpinAnimator,
    drag: DragTracker,
    spec: SpinSpec,
    /// Generation of the spin currently being driven by `on_frame`.
    live_generation: u64,
}

impl Wheel {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            rotation: RotationState::default(),
            animator: SpinAnimator::new(),
            drag: DragTracker::new(),
            spec: SpinSpec::default(),
            live_generation: 0,
        }
    }

    pub fn with_spec(labels: Vec<String>, spec: SpinSpec) -> Self {
        Self {
            spec,
            ..Self::new(labels)
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn item_count(&self) -> usize {
        self.labels.len()
    }

    /// Replaces the item list. The rotation is left where it is; only the
    /// sector content changes under the pointer.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    pub fn rotation_deg(&self) -> f64 {
        self.rotation.degrees()
    }

    pub fn is_spinning(&self) -> bool {
        self.animator.is_active()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn in_motion(&self) -> bool {
        self.rotation.in_motion()
    }

    /// Starts a randomized spin.
    ///
    /// Returns `Ok(false)` as an idempotent no-op while the wheel is
    /// already moving (spin or drag); rejects wheels with fewer than two
    /// items outright.
    pub fn spin(&mut self, unit_sample: f64) -> Result<bool, WheelError> {
        if self.labels.len() < 2 {
            return Err(WheelError::NotEnoughItems {
                count: self.labels.len(),
            });
        }
        if self.animator.is_active() || self.drag.is_active() {
            return Ok(false);
        }
        self.begin_spin(unit_sample);
        Ok(true)
    }

    /// Pointer went down on the wheel: direct manipulation preempts any
    /// programmatic spin.
    pub fn drag_start(&mut self, pos: Point, center: Point, now_ms: u64) {
        if self.animator.is_active() {
            self.animator.cancel();
        }
        self.drag.begin(pos, center, now_ms);
        self.rotation.set_in_motion(true);
    }

    /// Pointer moved during a drag; rotates the wheel by the corrected
    /// delta. Ignored while no drag is active.
    pub fn drag_move(&mut self, pos: Point, center: Point, now_ms: u64) {
        if let Some(delta) = self.drag.move_to(pos, center, now_ms) {
            self.rotation.apply_delta(delta);
        }
    }

    /// Pointer released: a drag always hands off into a full randomized
    /// spin from the accumulated rotation. The measured release velocity is
    /// logged but does not shape the spin.
    pub fn drag_end(&mut self, now_ms: u64, unit_sample: f64) {
        let Some(release_velocity) = self.drag.finish(now_ms) else {
            return;
        };
        debug!("drag released at {release_velocity:.0} deg/s, handing off to spin");
        self.begin_spin(unit_sample);
    }

    /// Advances the animation to `now_ms`.
    ///
    /// While a spin is live this moves the rotation; on the completing
    /// frame it resolves and reports the winner exactly once.
    pub fn on_frame(&mut self, now_ms: u64) -> FrameResult {
        let winner = match self.animator.frame(self.live_generation, now_ms) {
            FrameUpdate::Rotation(rotation) => {
                self.rotation.set_degrees(rotation);
                None
            }
            FrameUpdate::Finished(rotation) => {
                self.rotation.set_degrees(rotation);
                self.rotation.set_in_motion(false);
                self.resolve_completed(rotation)
            }
            FrameUpdate::Stale => None,
        };
        FrameResult {
            rotation_deg: self.rotation.degrees(),
            winner,
        }
    }

    fn begin_spin(&mut self, unit_sample: f64) {
        self.live_generation = self
            .animator
            .start(self.rotation.degrees(), &self.spec, unit_sample);
        self.rotation.set_in_motion(true);
    }

    fn resolve_completed(&self, final_rotation: f64) -> Option<WinnerResult> {
        match resolve_winner(final_rotation, self.labels.len()) {
            Ok(index) => {
                let label = self.labels[index].clone();
                info!("wheel stopped at {final_rotation:.1} deg, winner: {label:?}");
                Some(WinnerResult { index, label })
            }
            Err(err) => {
                // A drag on an empty wheel can legitimately finish a spin
                // with nothing to win; report nothing rather than fail the
                // frame loop.
                warn!("spin completed without a resolvable winner: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/wheel_tests.rs"]
mod tests;
