use super::*;

fn spec() -> SpinSpec {
    SpinSpec::default()
}

#[test]
fn unit_sample_maps_into_turn_range() {
    let spec = spec();
    assert_eq!(spec.turns_from_unit(0.0), 5.0);
    assert!(spec.turns_from_unit(0.999) < 10.0);
    assert_eq!(spec.turns_from_unit(0.5), 7.5);
    // Out-of-range samples clamp instead of escaping the band.
    assert_eq!(spec.turns_from_unit(-3.0), 5.0);
    assert_eq!(spec.turns_from_unit(42.0), 10.0);
}

#[test]
fn plan_targets_start_plus_whole_turns() {
    let plan = SpinPlan::randomized(123.0, &spec(), 0.0);
    assert_eq!(plan.target_rotation(), 123.0 + 5.0 * 360.0);
}

#[test]
fn rotation_is_monotonic_and_ends_at_target() {
    let mut animator = SpinAnimator::new();
    let generation = animator.start(0.0, &spec(), 0.2);
    let target = 0.0 + (5.0 + 0.2 * 5.0) * 360.0;

    let mut previous = 0.0;
    let mut finished_at = None;
    // ~60 fps frames past the 5000 ms duration.
    for frame in 0..400u64 {
        let now = frame * 16;
        match animator.frame(generation, now) {
            FrameUpdate::Rotation(rotation) => {
                assert!(
                    rotation >= previous,
                    "rotation went backwards: {rotation} < {previous}"
                );
                previous = rotation;
            }
            FrameUpdate::Finished(rotation) => {
                assert_eq!(rotation, target);
                finished_at = Some(now);
                break;
            }
            FrameUpdate::Stale => panic!("live spin reported a stale frame"),
        }
    }

    let finished_at = finished_at.expect("spin never finished");
    assert!(finished_at >= SPIN_DURATION_MS);
    // The plan is consumed with the completion; a late frame is a no-op.
    assert_eq!(animator.frame(generation, finished_at + 16), FrameUpdate::Stale);
    assert!(!animator.is_active());
}

#[test]
fn finishes_exactly_at_duration_boundary() {
    let mut animator = SpinAnimator::new();
    let generation = animator.start(90.0, &spec(), 0.0);
    // First frame binds the start time.
    assert!(matches!(animator.frame(generation, 1000), FrameUpdate::Rotation(_)));
    match animator.frame(generation, 1000 + SPIN_DURATION_MS) {
        FrameUpdate::Finished(rotation) => assert_eq!(rotation, 90.0 + 5.0 * 360.0),
        other => panic!("expected Finished, got {other:?}"),
    }
}

#[test]
fn starting_a_second_spin_supersedes_the_first() {
    let mut animator = SpinAnimator::new();
    let first = animator.start(0.0, &spec(), 0.0);
    assert!(matches!(animator.frame(first, 0), FrameUpdate::Rotation(_)));

    let second = animator.start(500.0, &spec(), 0.0);
    assert_ne!(first, second);

    // Frames from the first loop are no-ops forever, even past its would-be
    // completion time.
    assert_eq!(animator.frame(first, 100), FrameUpdate::Stale);
    assert_eq!(animator.frame(first, SPIN_DURATION_MS * 2), FrameUpdate::Stale);

    // The second spin runs to completion normally.
    assert!(matches!(animator.frame(second, 0), FrameUpdate::Rotation(_)));
    assert!(matches!(
        animator.frame(second, SPIN_DURATION_MS),
        FrameUpdate::Finished(_)
    ));
}

#[test]
fn cancel_prevents_completion() {
    let mut animator = SpinAnimator::new();
    let generation = animator.start(0.0, &spec(), 0.0);
    assert!(matches!(animator.frame(generation, 0), FrameUpdate::Rotation(_)));

    animator.cancel();
    assert!(!animator.is_active());
    assert_eq!(
        animator.frame(generation, SPIN_DURATION_MS * 2),
        FrameUpdate::Stale
    );
}

#[test]
fn eased_motion_is_front_loaded() {
    let mut animator = SpinAnimator::new();
    let generation = animator.start(0.0, &spec(), 0.0);
    let target = 5.0 * 360.0;

    animator.frame(generation, 0);
    let halfway = match animator.frame(generation, SPIN_DURATION_MS / 2) {
        FrameUpdate::Rotation(rotation) => rotation,
        other => panic!("expected Rotation, got {other:?}"),
    };
    // Ease-out cubic covers 87.5% of the distance in the first half.
    assert!((halfway / target - 0.875).abs() < 1e-9);
}
