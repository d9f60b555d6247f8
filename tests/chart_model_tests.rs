use std::time::Duration;

use approx::assert_abs_diff_eq;
use pie_chart_rs::animation::TrackStep;
use pie_chart_rs::api::PieChartModel;
use pie_chart_rs::core::Interpolator;
use pie_chart_rs::interaction::PointerEvent;

const INSTANT: Duration = Duration::ZERO;
const ONE_SECOND: Duration = Duration::from_secs(1);
const HALF_SECOND: Duration = Duration::from_millis(500);

#[test]
fn new_model_holds_placeholder_slice() {
    let model = PieChartModel::new();
    assert_eq!(model.boundaries(), &[0.0, 1.0]);
    assert_eq!(model.selections(), &[0.0]);
    assert_eq!(model.selected_index(), None);
    assert_eq!(model.data_len(), 0);
    assert_eq!(model.slice_count(), 1);
    assert!(!model.is_animating());
}

#[test]
fn target_boundaries_are_normalized_partial_sums() {
    assert_eq!(
        PieChartModel::target_boundaries(&[1.0, 1.0, 2.0]),
        vec![0.0, 0.25, 0.5, 1.0]
    );
    assert_eq!(PieChartModel::target_boundaries(&[]), vec![0.0, 1.0]);
    assert_eq!(
        PieChartModel::target_boundaries(&[0.0, 0.0]),
        vec![0.0, 0.0, 0.0]
    );
}

#[test]
fn instant_data_set_change_snaps_boundaries() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0, 2.0], INSTANT, Interpolator::Linear);
    assert_eq!(model.boundaries(), &[0.0, 0.25, 0.5, 1.0]);
    assert_eq!(model.data_len(), 3);

    let step = model.tick(INSTANT);
    assert_eq!(step.data_set, TrackStep::Completed);
    assert!(step.changed());
    assert!(!step.is_animating());
}

#[test]
fn growing_data_set_animates_from_padded_anchor() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0, 2.0], ONE_SECOND, Interpolator::Linear);

    assert_eq!(model.data_set_track().start_values(), &[0.0, 1.0, 1.0, 1.0]);
    assert_eq!(model.boundaries(), &[0.0, 1.0, 1.0, 1.0]);

    let step = model.tick(HALF_SECOND);
    assert_eq!(step.data_set, TrackStep::Running);
    assert!(model.is_animating());
    assert_eq!(model.boundaries(), &[0.0, 0.625, 0.75, 1.0]);

    model.tick(HALF_SECOND);
    assert_eq!(model.boundaries(), &[0.0, 0.25, 0.5, 1.0]);
}

#[test]
fn shrinking_data_set_pads_target_to_keep_length() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0, 2.0], INSTANT, Interpolator::Linear);
    model.set_data_set(&[1.0], ONE_SECOND, Interpolator::Linear);

    assert_eq!(model.data_set_track().end_values(), &[0.0, 1.0, 1.0, 1.0]);
    assert_eq!(model.slice_count(), 3);
    assert_eq!(model.data_len(), 1);
}

#[test]
fn transition_anchor_drops_zero_width_padding() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0, 2.0], INSTANT, Interpolator::Linear);
    model.set_data_set(&[1.0], INSTANT, Interpolator::Linear);
    assert_eq!(model.boundaries(), &[0.0, 1.0, 1.0, 1.0]);

    model.set_data_set(&[1.0, 1.0], ONE_SECOND, Interpolator::Linear);
    assert_eq!(model.data_set_track().start_values(), &[0.0, 1.0, 1.0]);
    assert_eq!(model.data_set_track().end_values(), &[0.0, 0.5, 1.0]);
}

#[test]
fn retarget_during_data_set_animation_starts_from_live_boundaries() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0], ONE_SECOND, Interpolator::Linear);
    model.tick(HALF_SECOND);
    assert_eq!(model.boundaries(), &[0.0, 0.75, 1.0]);

    model.set_data_set(&[3.0, 1.0], ONE_SECOND, Interpolator::Linear);
    assert_eq!(model.data_set_track().start_values(), &[0.0, 0.75, 1.0]);
    assert_eq!(model.boundaries(), &[0.0, 0.75, 1.0]);
}

#[test]
fn selection_target_is_one_hot_over_live_slices() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 2.0, 3.0], INSTANT, Interpolator::Linear);
    assert_eq!(model.selection_target(Some(1)), vec![0.0, 1.0, 0.0]);
    assert_eq!(model.selection_target(None), vec![0.0, 0.0, 0.0]);
    assert_eq!(model.selection_target(Some(7)), vec![0.0, 0.0, 0.0]);
}

#[test]
fn selection_animates_between_slices() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0], INSTANT, Interpolator::Linear);

    let previous = model.set_selection(Some(0), INSTANT, Interpolator::Linear);
    assert_eq!(previous, None);
    assert_eq!(model.selections(), &[1.0, 0.0]);

    let previous = model.set_selection(Some(1), ONE_SECOND, Interpolator::Linear);
    assert_eq!(previous, Some(0));
    assert_eq!(model.selected_index(), Some(1));

    model.tick(HALF_SECOND);
    assert_eq!(model.selections(), &[0.5, 0.5]);
}

#[test]
fn slices_report_rotated_angles_and_weights() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 3.0], INSTANT, Interpolator::Linear);
    model.set_selection(Some(1), INSTANT, Interpolator::Linear);

    let slices: Vec<_> = model.slices(-90.0).collect();
    assert_eq!(slices.len(), 2);
    assert_abs_diff_eq!(slices[0].start_angle, -90.0);
    assert_abs_diff_eq!(slices[0].end_angle, 0.0);
    assert_abs_diff_eq!(slices[1].sweep_angle(), 270.0);
    assert_eq!(slices[0].selection, 0.0);
    assert_eq!(slices[1].selection, 1.0);
}

#[test]
fn slices_without_selection_weights_default_to_zero() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0, 1.0], INSTANT, Interpolator::Linear);
    assert!(model.slices(0.0).all(|slice| slice.selection == 0.0));
}

#[test]
fn model_hit_test_uses_live_boundaries() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0, 2.0], INSTANT, Interpolator::Linear);
    assert_eq!(model.hit_test(PointerEvent::new(50.0, 150.0), 100.0, 100.0, 0.0), 1);
}

#[test]
fn restarting_with_zero_width_slices_keeps_drawn_boundaries() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 0.0, 1.0], INSTANT, Interpolator::Linear);
    let before = model.boundaries().to_vec();
    assert_eq!(before, vec![0.0, 0.5, 0.5, 1.0]);

    model.set_data_set(&[1.0, 0.0, 1.0], ONE_SECOND, Interpolator::Linear);
    assert_eq!(model.boundaries(), before.as_slice());
    assert_eq!(model.data_set_track().start_values(), before.as_slice());

    model.set_data_set(&[1.0, 2.0, 0.0, 1.0], ONE_SECOND, Interpolator::Linear);
    assert_eq!(&model.boundaries()[..4], before.as_slice());
    assert_eq!(model.boundaries()[4], 1.0);
}

#[test]
fn restart_drops_only_trailing_padding_from_the_anchor() {
    let mut model = PieChartModel::new();
    model.set_data_set(&[1.0, 1.0, 2.0], INSTANT, Interpolator::Linear);
    model.set_data_set(&[1.0], INSTANT, Interpolator::Linear);
    let before = model.boundaries().to_vec();
    assert_eq!(before, vec![0.0, 1.0, 1.0, 1.0]);

    model.set_data_set(&[1.0, 1.0], ONE_SECOND, Interpolator::Linear);
    let after = model.boundaries();
    assert_eq!(after, &before[..3]);
    assert!(before[3..].iter().all(|boundary| *boundary == before[2]));
}

#[test]
fn model_with_running_transition_to_empty_is_not_empty() {
    let mut model = PieChartModel::new();
    assert!(model.is_empty());
    model.set_data_set(&[1.0, 1.0], INSTANT, Interpolator::Linear);
    assert!(!model.is_empty());

    model.set_data_set(&[], ONE_SECOND, Interpolator::Linear);
    assert_eq!(model.data_len(), 0);
    assert!(!model.is_empty());

    model.tick(ONE_SECOND);
    assert!(model.is_empty());
}
