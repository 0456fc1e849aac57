//! Mouth oscillator tests.

use chomper::core::MouthOscillator;
use chomper::types::{MOUTH_MAX_DEG, MOUTH_MIN_DEG, MOUTH_STEP_DEG};

#[test]
fn test_starts_fully_open_and_closing() {
    let mouth = MouthOscillator::default();
    assert_eq!(mouth.angle_deg(), MOUTH_MAX_DEG);
    assert!(!mouth.is_opening());
}

#[test]
fn test_closes_to_exactly_the_minimum_then_flips() {
    let mut mouth = MouthOscillator::default();

    // 45 -> 35 -> 25 -> 15 -> 5 with the default 10 degree step.
    for expected in [35.0, 25.0, 15.0] {
        mouth.step(MOUTH_STEP_DEG);
        assert_eq!(mouth.angle_deg(), expected);
        assert!(!mouth.is_opening());
    }

    mouth.step(MOUTH_STEP_DEG);
    assert_eq!(mouth.angle_deg(), MOUTH_MIN_DEG);
    assert!(mouth.is_opening());
}

#[test]
fn test_opens_back_to_the_maximum_then_flips() {
    let mut mouth = MouthOscillator::default();
    for _ in 0..4 {
        mouth.step(MOUTH_STEP_DEG);
    }
    assert!(mouth.is_opening());

    for expected in [15.0, 25.0, 35.0] {
        mouth.step(MOUTH_STEP_DEG);
        assert_eq!(mouth.angle_deg(), expected);
        assert!(mouth.is_opening());
    }

    mouth.step(MOUTH_STEP_DEG);
    assert_eq!(mouth.angle_deg(), MOUTH_MAX_DEG);
    assert!(!mouth.is_opening());
}

#[test]
fn test_overshooting_steps_clamp_to_the_bounds() {
    // A step that does not divide the range evenly still lands exactly on
    // the bounds.
    let mut mouth = MouthOscillator::default();
    for _ in 0..200 {
        mouth.step(7.0);
        let angle = mouth.angle_deg();
        assert!(
            (MOUTH_MIN_DEG..=MOUTH_MAX_DEG).contains(&angle),
            "angle left the range: {angle}"
        );
    }
}

#[test]
fn test_never_leaves_the_range_with_the_default_step() {
    let mut mouth = MouthOscillator::default();
    for _ in 0..1000 {
        mouth.step(MOUTH_STEP_DEG);
        let angle = mouth.angle_deg();
        assert!((MOUTH_MIN_DEG..=MOUTH_MAX_DEG).contains(&angle));
    }
}
