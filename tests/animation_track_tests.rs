use std::time::Duration;

use approx::assert_abs_diff_eq;
use pie_chart_rs::animation::{AnimationTrack, TrackState, TrackStep};
use pie_chart_rs::core::Interpolator;

const HALF_SECOND: Duration = Duration::from_millis(500);

#[test]
fn running_track_reaches_end_and_goes_idle() {
    let mut track = AnimationTrack::new(vec![0.0, 0.0]);
    track.start(vec![10.0, 20.0], Duration::from_secs(1), Interpolator::Linear);
    assert_eq!(track.state(), TrackState::Running);
    assert_eq!(track.live(), &[0.0, 0.0]);

    assert_eq!(track.tick(HALF_SECOND), TrackStep::Running);
    assert_eq!(track.live(), &[5.0, 10.0]);

    assert_eq!(track.tick(HALF_SECOND), TrackStep::Completed);
    assert_eq!(track.live(), &[10.0, 20.0]);
    assert_eq!(track.state(), TrackState::Idle);
    assert_eq!(track.tick(HALF_SECOND), TrackStep::Idle);
}

#[test]
fn overlong_tick_clamps_to_end_values() {
    let mut track = AnimationTrack::new(vec![0.0]);
    track.start(vec![1.0], Duration::from_millis(100), Interpolator::Overshoot { tension: 2.0 });
    assert_eq!(track.tick(Duration::from_secs(5)), TrackStep::Completed);
    assert_eq!(track.live(), &[1.0]);
    assert_eq!(track.elapsed(), track.duration());
}

#[test]
fn retargeting_mid_flight_re_anchors_on_live_values() {
    let mut track = AnimationTrack::new(vec![0.0]);
    track.start(vec![10.0], Duration::from_secs(1), Interpolator::Linear);
    track.tick(HALF_SECOND);
    assert_eq!(track.live(), &[5.0]);

    track.start(vec![0.0], Duration::from_secs(1), Interpolator::Linear);
    assert_eq!(track.start_values(), &[5.0]);
    assert_eq!(track.live(), &[5.0]);
    assert_eq!(track.elapsed(), Duration::ZERO);

    track.tick(HALF_SECOND);
    assert_abs_diff_eq!(track.live()[0], 2.5, epsilon = 1e-12);
}

#[test]
fn retargeting_to_longer_array_pads_anchor_with_last_live_value() {
    let mut track = AnimationTrack::new(vec![0.0, 1.0]);
    track.start(vec![0.0, 0.2, 0.6, 1.0], Duration::from_secs(1), Interpolator::Linear);
    assert_eq!(track.start_values(), &[0.0, 1.0, 1.0, 1.0]);
    assert_eq!(track.end_values(), &[0.0, 0.2, 0.6, 1.0]);
}

#[test]
fn eased_track_applies_curve_to_elapsed_fraction() {
    let mut track = AnimationTrack::new(vec![0.0]);
    track.start(vec![1.0], Duration::from_secs(1), Interpolator::Decelerate { factor: 1.0 });
    track.tick(HALF_SECOND);
    assert_abs_diff_eq!(track.live()[0], 0.75, epsilon = 1e-12);
}

#[test]
#[should_panic(expected = "animation start and end arrays must have equal length")]
fn explicit_start_requires_equal_lengths() {
    let mut track = AnimationTrack::new(vec![0.0]);
    track.start_from(vec![0.0], vec![0.0, 1.0], Duration::from_secs(1), Interpolator::Linear);
}
