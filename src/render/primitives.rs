use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Per-channel linear blend: `ratio` 0 is `self`, 1 is `other`.
    #[must_use]
    pub fn mix(self, other: Self, ratio: f64) -> Self {
        let lerp = |from: f64, to: f64| from * (1.0 - ratio) + to * ratio;
        Self::rgba(
            lerp(self.red, other.red),
            lerp(self.green, other.green),
            lerp(self.blue, other.blue),
            lerp(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Outline of one slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliceShape {
    /// Circular sector from the center to `radius`.
    Sector { radius: f64 },
    /// Annular sector between `inner_radius` and `outer_radius`.
    Ring {
        outer_radius: f64,
        inner_radius: f64,
    },
}

impl SliceShape {
    #[must_use]
    pub fn outer_radius(self) -> f64 {
        match self {
            Self::Sector { radius } => radius,
            Self::Ring { outer_radius, .. } => outer_radius,
        }
    }

    #[must_use]
    pub fn inner_radius(self) -> f64 {
        match self {
            Self::Sector { .. } => 0.0,
            Self::Ring { inner_radius, .. } => inner_radius,
        }
    }
}

/// Drop shadow cast by an elevated slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowPrimitive {
    pub blur_radius: f64,
    pub offset_y: f64,
    pub color: Color,
}

/// Draw command for one pie slice in pixel space.
///
/// Angles are in degrees, clockwise in screen space. `inset` is the distance
/// each straight edge is pulled into the slice to leave spacing between
/// neighbours; `offset_x`/`offset_y` translate the whole slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlicePrimitive {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub inset: f64,
    pub shape: SliceShape,
    pub offset_x: f64,
    pub offset_y: f64,
    pub fill_color: Color,
    pub shadow: Option<ShadowPrimitive>,
}

impl SlicePrimitive {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("cx", self.cx),
            ("cy", self.cy),
            ("start_angle", self.start_angle),
            ("sweep_angle", self.sweep_angle),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "slice `{name}` must be finite"
                )));
            }
        }
        if !self.inset.is_finite() || self.inset < 0.0 {
            return Err(ChartError::InvalidData(
                "slice inset must be finite and >= 0".to_owned(),
            ));
        }
        let outer = self.shape.outer_radius();
        let inner = self.shape.inner_radius();
        if !outer.is_finite() || !inner.is_finite() || inner < 0.0 || inner > outer {
            return Err(ChartError::InvalidData(
                "slice radii must be finite with 0 <= inner <= outer".to_owned(),
            ));
        }
        if let Some(shadow) = self.shadow {
            if !shadow.blur_radius.is_finite()
                || shadow.blur_radius < 0.0
                || !shadow.offset_y.is_finite()
            {
                return Err(ChartError::InvalidData(
                    "slice shadow must have finite blur >= 0 and finite offset".to_owned(),
                ));
            }
            shadow.color.validate()?;
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
