//! Wheel core: the spin/rotation engine.
//!
//! This crate owns everything with nontrivial state transitions or timing:
//! the frame-driven spin animator, the drag-to-rotation tracker with its
//! angular-velocity window, and the rotation-to-winner resolver. It does no
//! drawing and reads no clock — every entry point takes a millisecond
//! timestamp supplied by the host, so the whole engine runs headless in
//! tests.

mod drag;
mod easing;
mod error;
mod resolver;
mod rotation;
mod spin;
mod velocity;
mod wheel;

pub use drag::DragTracker;
pub use easing::Easing;
pub use error::WheelError;
pub use resolver::{resolve_winner, POINTER_DEG};
pub use rotation::RotationState;
pub use spin::{FrameUpdate, SpinAnimator, SpinPlan, SpinSpec, SPIN_DURATION_MS};
pub use velocity::AngularVelocityTracker;
pub use wheel::{FrameResult, Wheel, WinnerResult};
