pub mod adapter;
mod chart;
mod chart_config;
mod chart_model;
mod chart_snapshot;
mod data_controller;
mod json_contract;
mod render_frame_builder;
mod selection_controller;

pub use adapter::{
    DataSetAdapter, DataSetObservable, FloatListAdapter, SharedDataSetAdapter, Subscription,
    percent_label,
};
pub use chart::{PieChart, SelectionListenerId};
pub use chart_config::{AnimationConfig, LabelConfig, PieChartConfig};
pub use chart_model::{ModelStep, PieChartModel, SliceAngles};
pub use chart_snapshot::PieChartSnapshot;
pub use json_contract::{PIE_CHART_SNAPSHOT_JSON_SCHEMA_V1, PieChartSnapshotJsonContractV1};
