//! pie-chart-rs: animated pie/donut chart engine.
//!
//! The crate turns a dynamic list of values into normalized slice boundaries,
//! tweens data-set and selection transitions on a host-driven frame clock,
//! resolves pointer input to slices and emits backend-agnostic draw
//! primitives for slices and labels.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PieChart, PieChartConfig};
pub use error::{ChartError, ChartResult};
