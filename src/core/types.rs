use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One data set value. Slices are sized by `value` relative to the data set sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            value: decimal_to_f64(value, "value")?,
        })
    }
}

/// Insets applied around the chart area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Resolved circle the pie is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl ChartGeometry {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    /// Largest square centered inside the padded viewport.
    ///
    /// `label_padding` is reserved on both sides of each axis so outside
    /// labels fit. Returns a zero radius when the padding consumes the viewport.
    #[must_use]
    pub fn centered_in(viewport: Viewport, padding: Padding, label_padding: (f64, f64)) -> Self {
        let (label_h, label_v) = label_padding;
        let left = padding.left + label_h;
        let top = padding.top + label_v;
        let right = f64::from(viewport.width) - padding.right - label_h;
        let bottom = f64::from(viewport.height) - padding.bottom - label_v;

        let size = (right - left).min(bottom - top).max(0.0);
        Self {
            cx: (left + right) / 2.0,
            cy: (top + bottom) / 2.0,
            radius: size / 2.0,
        }
    }
}
