//! Frame-stepped array animation.
//!
//! A track owns a start array, an end array, a duration and an interpolator.
//! The host clock advances it through `tick`; nothing here schedules time on
//! its own.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Interpolator, evaluate, with_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackState {
    Idle,
    Running,
}

/// Outcome of one `AnimationTrack::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackStep {
    /// Nothing to advance.
    Idle,
    /// Live values moved and the animation continues.
    Running,
    /// Live values reached the end array during this tick.
    Completed,
}

impl TrackStep {
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTrack {
    start: Vec<f64>,
    end: Vec<f64>,
    live: Vec<f64>,
    elapsed: Duration,
    duration: Duration,
    interpolator: Interpolator,
    state: TrackState,
    completion_pending: bool,
}

impl AnimationTrack {
    /// Creates an idle track resting at `initial`.
    #[must_use]
    pub fn new(initial: Vec<f64>) -> Self {
        Self {
            start: initial.clone(),
            end: initial.clone(),
            live: initial,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            interpolator: Interpolator::Linear,
            state: TrackState::Idle,
            completion_pending: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> TrackState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TrackState::Running
    }

    /// Current interpolated values.
    #[must_use]
    pub fn live(&self) -> &[f64] {
        &self.live
    }

    #[must_use]
    pub fn start_values(&self) -> &[f64] {
        &self.start
    }

    #[must_use]
    pub fn end_values(&self) -> &[f64] {
        &self.end
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Animates from the current live values towards `end`.
    ///
    /// A running animation is re-anchored at its current interpolated
    /// values, so the live array never jumps. The anchor is resized to
    /// `end.len()` with `with_size`.
    pub fn start(&mut self, end: Vec<f64>, duration: Duration, interpolator: Interpolator) {
        let anchor = with_size(&self.live, end.len(), 0.0);
        self.start_from(anchor, end, duration, interpolator);
    }

    /// Animates from an explicit `start` array towards `end`.
    ///
    /// # Panics
    ///
    /// Panics when `start` and `end` differ in length.
    pub fn start_from(
        &mut self,
        start: Vec<f64>,
        end: Vec<f64>,
        duration: Duration,
        interpolator: Interpolator,
    ) {
        assert_eq!(
            start.len(),
            end.len(),
            "animation start and end arrays must have equal length"
        );
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.interpolator = interpolator;
        self.start = start;
        self.end = end;

        if duration.is_zero() {
            self.live = self.end.clone();
            self.state = TrackState::Idle;
            self.completion_pending = true;
        } else {
            self.live = self.start.clone();
            self.state = TrackState::Running;
            self.completion_pending = false;
        }
    }

    /// Advances the animation by `delta`.
    pub fn tick(&mut self, delta: Duration) -> TrackStep {
        if self.completion_pending {
            self.completion_pending = false;
            return TrackStep::Completed;
        }
        if self.state == TrackState::Idle {
            return TrackStep::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.live = self.end.clone();
            self.state = TrackState::Idle;
            return TrackStep::Completed;
        }

        let fraction = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        let progress = self.interpolator.interpolate(fraction);
        self.live = evaluate(progress, &self.start, &self.end);
        TrackStep::Running
    }
}
