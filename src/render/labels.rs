use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, FULL_ANGLE, deg_to_rad};
use crate::error::{ChartError, ChartResult};

/// Where a label sits relative to the chart circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelPosition {
    Inside,
    /// Centered on the circle's rim.
    Centered,
    #[default]
    Outside,
}

impl LabelPosition {
    /// Signed direction factor: -1 inside, 0 centered, +1 outside.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Inside => -1.0,
            Self::Centered => 0.0,
            Self::Outside => 1.0,
        }
    }

    #[must_use]
    pub fn from_factor(factor: i32) -> Option<Self> {
        match factor {
            -1 => Some(Self::Inside),
            0 => Some(Self::Centered),
            1 => Some(Self::Outside),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Measures label text before placement.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextSize;
}

/// Font-agnostic measurer estimating sizes from the character count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproxTextMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f64,
    /// Glyph box height as a fraction of the font size.
    pub height_ratio: f64,
}

impl Default for ApproxTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            height_ratio: 0.75,
        }
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextSize {
        TextSize {
            width: text.chars().count() as f64 * font_size_px * self.char_width_ratio,
            height: if text.is_empty() {
                0.0
            } else {
                font_size_px * self.height_ratio
            },
        }
    }
}

/// Resolved label anchor in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub text: String,
    pub center_x: f64,
    pub center_y: f64,
    /// Left edge of the text box.
    pub x: f64,
    /// Baseline of the text box.
    pub y: f64,
    pub size: TextSize,
}

impl PlacedLabel {
    #[must_use]
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.center_x += dx;
        self.center_y += dy;
        self.x += dx;
        self.y += dy;
        self
    }
}

/// Places slice labels along the slice bisector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub position: LabelPosition,
    /// Distance between the circle rim and the label, in the `position` direction.
    pub spacing_px: f64,
    /// Slices narrower than this share of the circle, in percent, get no label.
    pub min_percent: u8,
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self {
            position: LabelPosition::Outside,
            spacing_px: 0.0,
            min_percent: 0,
        }
    }
}

impl LabelPlacement {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.spacing_px.is_finite() {
            return Err(ChartError::InvalidData(
                "label spacing must be finite".to_owned(),
            ));
        }
        if self.min_percent > 100 {
            return Err(ChartError::InvalidData(
                "label min percent must be in [0, 100]".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn is_visible(self, start_angle: f64, end_angle: f64) -> bool {
        (end_angle - start_angle) / FULL_ANGLE * 100.0 >= f64::from(self.min_percent)
    }

    /// Anchors `text` of measured `size` for the slice spanning the given angles.
    ///
    /// Returns `None` for slices below the visibility threshold.
    #[must_use]
    pub fn place(
        self,
        geometry: ChartGeometry,
        start_angle: f64,
        end_angle: f64,
        text: &str,
        size: TextSize,
    ) -> Option<PlacedLabel> {
        if !self.is_visible(start_angle, end_angle) {
            return None;
        }

        let middle = deg_to_rad((start_angle + end_angle) / 2.0);
        let position = self.position.factor();
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        let anchor_radius = geometry.radius + self.spacing_px * position;
        let center_x = geometry.cx + (anchor_radius + half_width * position) * middle.cos();
        let center_y = geometry.cy + (anchor_radius + half_height * position) * middle.sin();

        Some(PlacedLabel {
            text: text.to_owned(),
            center_x,
            center_y,
            x: center_x - half_width,
            y: center_y + half_height,
            size,
        })
    }
}
