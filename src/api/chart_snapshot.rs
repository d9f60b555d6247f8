use serde::{Deserialize, Serialize};

use crate::animation::TrackState;
use crate::core::{ChartGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::PieChart;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartSnapshot {
    pub viewport: Viewport,
    pub geometry: ChartGeometry,
    pub rotation_angle: f64,
    pub boundaries: Vec<f64>,
    pub selections: Vec<f64>,
    pub selected_index: Option<usize>,
    pub data_len: usize,
    pub data_set_state: TrackState,
    pub selection_state: TrackState,
    pub slice_renderer: Option<String>,
}

impl<R: Renderer> PieChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> PieChartSnapshot {
        PieChartSnapshot {
            viewport: self.config.viewport,
            geometry: self.geometry(),
            rotation_angle: self.config.rotation_angle,
            boundaries: self.model.boundaries().to_vec(),
            selections: self.model.selections().to_vec(),
            selected_index: self.model.selected_index(),
            data_len: self.model.data_len(),
            data_set_state: self.model.data_set_track().state(),
            selection_state: self.model.selection_track().state(),
            slice_renderer: self.slice_renderer_kind().map(str::to_owned),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
