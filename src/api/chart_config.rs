use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Interpolator, Padding, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LabelPlacement, LabelPosition, SliceStyle, WEDGE_RENDERER};

/// Duration and easing of one animation track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    #[serde(default)]
    pub interpolator: Interpolator,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 0,
            interpolator: Interpolator::default(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn new(duration_ms: u64, interpolator: Interpolator) -> Self {
        Self {
            duration_ms,
            interpolator,
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Label placement and text styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub visible: bool,
    pub position: LabelPosition,
    pub spacing_px: f64,
    /// Slices below this share of the circle, in percent, are not labelled.
    pub min_percent: u8,
    pub font_size_px: f64,
    pub color: Color,
    /// Horizontal space reserved on both sides of the chart for labels.
    pub padding_horizontal_px: f64,
    /// Vertical space reserved above and below the chart for labels.
    pub padding_vertical_px: f64,
    /// When set, reserved label space grows to fit this text.
    pub padding_reference_text: Option<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            visible: true,
            position: LabelPosition::Outside,
            spacing_px: 0.0,
            min_percent: 0,
            font_size_px: 12.0,
            color: Color::BLACK,
            padding_horizontal_px: 0.0,
            padding_vertical_px: 0.0,
            padding_reference_text: None,
        }
    }
}

impl LabelConfig {
    #[must_use]
    pub fn placement(&self) -> LabelPlacement {
        LabelPlacement {
            position: self.position,
            spacing_px: self.spacing_px,
            min_percent: self.min_percent,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.placement().validate()?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        for (value, name) in [
            (self.padding_horizontal_px, "padding_horizontal_px"),
            (self.padding_vertical_px, "padding_vertical_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "label `{name}` must be finite and >= 0"
                )));
            }
        }
        self.color.validate()
    }
}

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    /// Angle, in degrees, of the zero value position.
    #[serde(default)]
    pub rotation_angle: f64,
    #[serde(default)]
    pub data_set_animation: AnimationConfig,
    #[serde(default)]
    pub selection_animation: AnimationConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    /// Registry tag of the slice renderer; `None` draws no slices.
    #[serde(default = "default_slice_renderer")]
    pub slice_renderer: Option<String>,
    #[serde(default)]
    pub slice_style: SliceStyle,
}

fn default_slice_renderer() -> Option<String> {
    Some(WEDGE_RENDERER.to_owned())
}

impl PieChartConfig {
    /// Creates a config with wedge slices and instant animations.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: Padding::default(),
            rotation_angle: 0.0,
            data_set_animation: AnimationConfig::default(),
            selection_animation: AnimationConfig::default(),
            labels: LabelConfig::default(),
            slice_renderer: default_slice_renderer(),
            slice_style: SliceStyle::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_rotation_angle(mut self, rotation_angle: f64) -> Self {
        self.rotation_angle = rotation_angle;
        self
    }

    #[must_use]
    pub fn with_data_set_animation(mut self, animation: AnimationConfig) -> Self {
        self.data_set_animation = animation;
        self
    }

    #[must_use]
    pub fn with_selection_animation(mut self, animation: AnimationConfig) -> Self {
        self.selection_animation = animation;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelConfig) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_slice_renderer(mut self, tag: Option<&str>) -> Self {
        self.slice_renderer = tag.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_slice_style(mut self, style: SliceStyle) -> Self {
        self.slice_style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (value, name) in [
            (self.padding.left, "left"),
            (self.padding.top, "top"),
            (self.padding.right, "right"),
            (self.padding.bottom, "bottom"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "padding `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.rotation_angle.is_finite() {
            return Err(ChartError::InvalidData(
                "rotation angle must be finite".to_owned(),
            ));
        }
        self.data_set_animation.interpolator.validate()?;
        self.selection_animation.interpolator.validate()?;
        self.labels.validate()?;
        self.slice_style.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
