use super::*;

#[test]
fn starts_in_the_not_started_state() {
    let timing = Timing::new(2.0, false);
    assert!(!timing.is_started());
    assert_eq!(timing.elapsed(100.0), 0.0);
    assert_eq!(timing.fraction(100.0), 0.0);
    assert!(!timing.is_finished());
}

#[test]
fn fraction_clamps_to_the_duration() {
    let mut timing = Timing::new(2.0, false);
    timing.start(10.0);
    assert_eq!(timing.fraction(11.0), 0.5);
    assert_eq!(timing.fraction(14.0), 1.0);
}

#[test]
fn zero_duration_reports_zero_fraction() {
    let mut timing = Timing::new(0.0, false);
    timing.start(1.0);
    assert_eq!(timing.fraction(5.0), 0.0);
}

#[test]
fn finishes_only_strictly_past_the_duration() {
    let mut timing = Timing::new(1.0, false);
    timing.start(0.0);
    timing.mark_updated(1.0);
    assert!(!timing.is_finished());
    timing.mark_updated(1.0001);
    assert!(timing.is_finished());
}

#[test]
fn never_updated_never_finishes() {
    let mut timing = Timing::new(0.5, false);
    timing.start(0.0);
    assert!(!timing.is_finished());
}

#[test]
fn reset_returns_to_not_started() {
    let mut timing = Timing::new(1.0, true);
    timing.start(0.0);
    timing.mark_updated(3.0);
    assert!(timing.is_finished());
    timing.reset();
    assert!(!timing.is_started());
    assert!(!timing.is_finished());
    assert!(timing.repeats());
}

#[test]
fn elapsed_never_goes_negative() {
    let mut timing = Timing::new(1.0, false);
    timing.start(5.0);
    assert_eq!(timing.elapsed(4.0), 0.0);
}
