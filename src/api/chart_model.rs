use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationTrack, TrackStep};
use crate::core::{
    FULL_ANGLE, Interpolator, normalize, partial_sums, trim_trailing_duplicates, with_size,
};
use crate::interaction::{PointerEvent, hit_test};

/// Boundaries of a chart without data: one degenerate full-circle slice.
const PLACEHOLDER_BOUNDARIES: [f64; 2] = [0.0, 1.0];

/// Angular span of one live slice, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceAngles {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Animated selection weight in `[0, 1]`.
    pub selection: f64,
}

impl SliceAngles {
    #[must_use]
    pub fn sweep_angle(self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Result of advancing both animation tracks by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStep {
    pub data_set: TrackStep,
    pub selection: TrackStep,
}

impl ModelStep {
    /// Whether live values moved during this step.
    #[must_use]
    pub fn changed(self) -> bool {
        self.data_set.changed() || self.selection.changed()
    }

    /// Whether another tick is needed to finish an animation.
    #[must_use]
    pub fn is_animating(self) -> bool {
        self.data_set == TrackStep::Running || self.selection == TrackStep::Running
    }
}

/// Live slice geometry and selection state of one chart.
///
/// Boundaries and selection weights only change through the two animation
/// tracks: the data-set track and the selection track.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartModel {
    data_set_track: AnimationTrack,
    selection_track: AnimationTrack,
    selected_index: Option<usize>,
    data_len: usize,
}

impl Default for PieChartModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PieChartModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_set_track: AnimationTrack::new(PLACEHOLDER_BOUNDARIES.to_vec()),
            selection_track: AnimationTrack::new(vec![0.0]),
            selected_index: None,
            data_len: 0,
        }
    }

    /// Live boundaries in `[0, 1]`, one more than the live slice count.
    #[must_use]
    pub fn boundaries(&self) -> &[f64] {
        self.data_set_track.live()
    }

    /// Live selection weights, one per slice once the selection track has run.
    #[must_use]
    pub fn selections(&self) -> &[f64] {
        self.selection_track.live()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Number of values in the last applied data set.
    #[must_use]
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Number of live slices, including zero-width padding slices.
    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.boundaries().len().saturating_sub(1)
    }

    #[must_use]
    pub fn data_set_track(&self) -> &AnimationTrack {
        &self.data_set_track
    }

    #[must_use]
    pub fn selection_track(&self) -> &AnimationTrack {
        &self.selection_track
    }

    /// No data and no transition towards an empty data set still running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_len == 0 && !self.data_set_track.is_running()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.data_set_track.is_running() || self.selection_track.is_running()
    }

    /// Boundaries a data set settles at.
    #[must_use]
    pub fn target_boundaries(values: &[f64]) -> Vec<f64> {
        if values.is_empty() {
            return PLACEHOLDER_BOUNDARIES.to_vec();
        }
        partial_sums(&normalize(values))
    }

    /// Starts animating the boundaries towards `values`.
    ///
    /// Both arrays are padded to the longer length so the tween runs between
    /// equal-length arrays. The animation starts from the live boundaries
    /// without the zero-width padding slices left at their end by an earlier
    /// shrink, so the first frame draws exactly what was drawn before.
    pub fn set_data_set(&mut self, values: &[f64], duration: Duration, interpolator: Interpolator) {
        let target = Self::target_boundaries(values);
        let anchor = trim_trailing_duplicates(self.boundaries());
        let common_len = target.len().max(anchor.len());

        let start = with_size(anchor, common_len, 0.0);
        let end = with_size(&target, common_len, 0.0);
        self.data_len = values.len();
        self.data_set_track.start_from(start, end, duration, interpolator);
    }

    /// Selection weights a selection of `index` settles at.
    ///
    /// All zeros when `index` is `None` or outside the live slices.
    #[must_use]
    pub fn selection_target(&self, index: Option<usize>) -> Vec<f64> {
        (0..self.slice_count())
            .map(|slice| if Some(slice) == index { 1.0 } else { 0.0 })
            .collect()
    }

    /// Selects `index` and animates selection weights towards it.
    ///
    /// Returns the previously selected index.
    pub fn set_selection(
        &mut self,
        index: Option<usize>,
        duration: Duration,
        interpolator: Interpolator,
    ) -> Option<usize> {
        let previous = self.selected_index;
        self.selected_index = index;
        let target = self.selection_target(index);
        self.selection_track.start(target, duration, interpolator);
        previous
    }

    /// Advances both tracks by the same frame delta.
    pub fn tick(&mut self, delta: Duration) -> ModelStep {
        ModelStep {
            data_set: self.data_set_track.tick(delta),
            selection: self.selection_track.tick(delta),
        }
    }

    /// Live slices as angles measured from `rotation_angle`.
    pub fn slices(&self, rotation_angle: f64) -> impl Iterator<Item = SliceAngles> + '_ {
        let selections = self.selections();
        self.boundaries()
            .windows(2)
            .enumerate()
            .map(move |(index, pair)| SliceAngles {
                index,
                start_angle: rotation_angle + FULL_ANGLE * pair[0],
                end_angle: rotation_angle + FULL_ANGLE * pair[1],
                selection: selections.get(index).copied().unwrap_or(0.0),
            })
    }

    /// Slice index under `pointer` for a chart centered at (`cx`, `cy`).
    #[must_use]
    pub fn hit_test(&self, pointer: PointerEvent, cx: f64, cy: f64, rotation_angle: f64) -> usize {
        hit_test(self.boundaries(), pointer, cx, cy, rotation_angle)
    }
}
