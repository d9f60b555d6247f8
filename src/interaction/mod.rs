use serde::{Deserialize, Serialize};

use crate::core::{FULL_ANGLE, rad_to_deg};

/// Pointer position in the chart's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps a pointer to the fraction of the circle it points at, in `[0, 1)`.
///
/// Angles grow clockwise in screen space (y axis pointing down) and are
/// measured from `rotation_angle` degrees. Returns `None` for non-finite input.
#[must_use]
pub fn pointer_to_circle_fraction(
    pointer: PointerEvent,
    cx: f64,
    cy: f64,
    rotation_angle: f64,
) -> Option<f64> {
    let angle = rad_to_deg((pointer.y - cy).atan2(pointer.x - cx)) - rotation_angle;
    let value = angle / FULL_ANGLE;
    if !value.is_finite() {
        return None;
    }
    // rem_euclid rounds up to exactly 1.0 for tiny negative inputs
    let value = value.rem_euclid(1.0);
    Some(if value >= 1.0 { 0.0 } else { value })
}

/// Index of the last boundary that is `<= value`, or 0 when there is none.
///
/// Ties resolve to the later slice, so zero-width slices are never hit when a
/// wider slice starts at the same boundary.
#[must_use]
pub fn slice_index_at(boundaries: &[f64], value: f64) -> usize {
    boundaries
        .iter()
        .rposition(|boundary| *boundary <= value)
        .unwrap_or(0)
}

/// Resolves a pointer position to a slice index using live `boundaries`.
#[must_use]
pub fn hit_test(
    boundaries: &[f64],
    pointer: PointerEvent,
    cx: f64,
    cy: f64,
    rotation_angle: f64,
) -> usize {
    pointer_to_circle_fraction(pointer, cx, cy, rotation_angle)
        .map_or(0, |value| slice_index_at(boundaries, value))
}

/// Pointer bookkeeping exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    last_pointer_up: Option<PointerEvent>,
    last_hit: Option<usize>,
}

impl InteractionState {
    #[must_use]
    pub fn last_pointer_up(self) -> Option<PointerEvent> {
        self.last_pointer_up
    }

    #[must_use]
    pub fn last_hit(self) -> Option<usize> {
        self.last_hit
    }

    pub fn on_pointer_up(&mut self, pointer: PointerEvent, hit: usize) {
        self.last_pointer_up = Some(pointer);
        self.last_hit = Some(hit);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
