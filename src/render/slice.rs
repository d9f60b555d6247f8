//! Slice drawing strategies.
//!
//! A `SliceRenderer` turns one slice (index, angles, selection weight) into
//! a `SlicePrimitive`. Two strategies ship with the crate: full wedges and
//! donut ring sectors. Strategies are looked up by tag through
//! `SliceRendererRegistry`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, deg_to_rad};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, ShadowPrimitive, SlicePrimitive, SliceShape};

pub const WEDGE_RENDERER: &str = "wedge";
pub const RING_RENDERER: &str = "ring";

/// Selection weights at or below this value cast no shadow.
const SHADOW_MIN_SELECTION: f64 = 0.01;

/// Styling shared by slice renderers, resolved once at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceStyle {
    /// Slice fill colors, cycled by slice index.
    pub colors: Vec<Color>,
    /// Fill colors of fully selected slices, cycled by slice index.
    pub selected_colors: Vec<Color>,
    pub shadow_color: Color,
    /// Shadow size of a fully selected slice.
    pub selection_elevation: f64,
    /// Outward shift of a fully selected slice along its bisector.
    pub selection_shift: f64,
    /// Gap between neighbouring wedges.
    pub slice_spacing: f64,
    /// Ring thickness of an unselected donut slice.
    pub donut_width: f64,
    /// Ring thickness of a fully selected donut slice; `None` keeps `donut_width`.
    pub selected_donut_width: Option<f64>,
    /// Gap between neighbouring ring sectors.
    pub donut_spacing: f64,
}

impl Default for SliceStyle {
    fn default() -> Self {
        Self {
            colors: vec![Color::CYAN],
            selected_colors: vec![Color::BLUE],
            shadow_color: Color::BLACK,
            selection_elevation: 4.0,
            selection_shift: 0.0,
            slice_spacing: 0.0,
            donut_width: 50.0,
            selected_donut_width: None,
            donut_spacing: 0.0,
        }
    }
}

impl SliceStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if self.colors.is_empty() || self.selected_colors.is_empty() {
            return Err(ChartError::InvalidData(
                "slice style palettes must not be empty".to_owned(),
            ));
        }
        for color in self.colors.iter().chain(&self.selected_colors) {
            color.validate()?;
        }
        self.shadow_color.validate()?;

        for (value, name) in [
            (self.selection_elevation, "selection_elevation"),
            (self.selection_shift, "selection_shift"),
            (self.slice_spacing, "slice_spacing"),
            (self.donut_width, "donut_width"),
            (self.selected_donut_width(), "selected_donut_width"),
            (self.donut_spacing, "donut_spacing"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "slice style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn selected_donut_width(&self) -> f64 {
        self.selected_donut_width.unwrap_or(self.donut_width)
    }

    /// Fill color for slice `index` at the given selection weight.
    #[must_use]
    pub fn fill_color(&self, index: usize, selection: f64) -> Color {
        let base = self.colors[index % self.colors.len()];
        let selected = self.selected_colors[index % self.selected_colors.len()];
        base.mix(selected, selection)
    }

    /// Radius left for slice outlines once shift and elevation are reserved,
    /// so elevated or shifted slices stay inside the chart circle.
    #[must_use]
    pub fn outer_radius(&self, chart_radius: f64) -> f64 {
        (chart_radius - self.selection_shift - self.selection_elevation).max(0.0)
    }
}

/// Strategy turning one slice into a draw primitive.
///
/// Implementors provide the outline; color blending, shadow, outer radius
/// and the selection shift are shared by every strategy.
pub trait SliceRenderer {
    /// Registry tag of this strategy.
    fn kind(&self) -> &str;

    fn style(&self) -> &SliceStyle;

    /// Outline for a slice drawn inside `outer_radius` at `selection` weight.
    fn shape(&self, outer_radius: f64, selection: f64) -> SliceShape;

    /// Spacing pulled into each slice edge.
    fn inset(&self) -> f64;

    /// Translation moving a selected slice outwards along its bisector.
    ///
    /// Labels reuse it so they travel with their slice.
    fn transform(&self, start_angle: f64, end_angle: f64, selection: f64) -> (f64, f64) {
        let distance = selection * self.style().selection_shift;
        let middle = deg_to_rad((start_angle + end_angle) / 2.0);
        (distance * middle.cos(), distance * middle.sin())
    }

    fn draw_slice(
        &self,
        geometry: ChartGeometry,
        index: usize,
        start_angle: f64,
        end_angle: f64,
        selection: f64,
    ) -> SlicePrimitive {
        let style = self.style();
        let outer_radius = style.outer_radius(geometry.radius);
        let (offset_x, offset_y) = self.transform(start_angle, end_angle, selection);
        let shadow = (selection > SHADOW_MIN_SELECTION).then(|| ShadowPrimitive {
            blur_radius: selection * style.selection_elevation,
            offset_y: selection * style.selection_elevation,
            color: style.shadow_color,
        });

        SlicePrimitive {
            index,
            cx: geometry.cx,
            cy: geometry.cy,
            start_angle,
            sweep_angle: end_angle - start_angle,
            inset: self.inset(),
            shape: self.shape(outer_radius, selection),
            offset_x,
            offset_y,
            fill_color: style.fill_color(index, selection),
            shadow,
        }
    }
}

/// Classic pie slices: circular sectors from the center.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WedgeSliceRenderer {
    style: SliceStyle,
}

impl WedgeSliceRenderer {
    #[must_use]
    pub fn new(style: SliceStyle) -> Self {
        Self { style }
    }
}

impl SliceRenderer for WedgeSliceRenderer {
    fn kind(&self) -> &str {
        WEDGE_RENDERER
    }

    fn style(&self) -> &SliceStyle {
        &self.style
    }

    fn shape(&self, outer_radius: f64, _selection: f64) -> SliceShape {
        SliceShape::Sector {
            radius: outer_radius,
        }
    }

    fn inset(&self) -> f64 {
        self.style.slice_spacing / 2.0
    }
}

/// Donut slices: ring sectors whose thickness follows the selection weight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RingSliceRenderer {
    style: SliceStyle,
}

impl RingSliceRenderer {
    #[must_use]
    pub fn new(style: SliceStyle) -> Self {
        Self { style }
    }
}

impl SliceRenderer for RingSliceRenderer {
    fn kind(&self) -> &str {
        RING_RENDERER
    }

    fn style(&self) -> &SliceStyle {
        &self.style
    }

    fn shape(&self, outer_radius: f64, selection: f64) -> SliceShape {
        let width = (1.0 - selection) * self.style.donut_width
            + selection * self.style.selected_donut_width();
        let thickness = width.min(outer_radius);
        SliceShape::Ring {
            outer_radius,
            inner_radius: (outer_radius - thickness).max(0.0),
        }
    }

    fn inset(&self) -> f64 {
        self.style.donut_spacing / 2.0
    }
}

pub type SliceRendererFactory = Box<dyn Fn(&SliceStyle) -> Box<dyn SliceRenderer>>;

/// Maps renderer tags to constructors.
pub struct SliceRendererRegistry {
    factories: IndexMap<String, SliceRendererFactory>,
}

impl Default for SliceRendererRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl SliceRendererRegistry {
    /// Registry without any strategy.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Registry with the `wedge` and `ring` strategies.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.factories.insert(
            WEDGE_RENDERER.to_owned(),
            Box::new(|style: &SliceStyle| {
                Box::new(WedgeSliceRenderer::new(style.clone())) as Box<dyn SliceRenderer>
            }),
        );
        registry.factories.insert(
            RING_RENDERER.to_owned(),
            Box::new(|style: &SliceStyle| {
                Box::new(RingSliceRenderer::new(style.clone())) as Box<dyn SliceRenderer>
            }),
        );
        registry
    }

    /// Registers a strategy under a unique, non-empty tag.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        factory: impl Fn(&SliceStyle) -> Box<dyn SliceRenderer> + 'static,
    ) -> ChartResult<()> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(ChartError::InvalidData(
                "slice renderer tag must not be empty".to_owned(),
            ));
        }
        if self.factories.contains_key(&tag) {
            return Err(ChartError::InvalidData(format!(
                "slice renderer `{tag}` is already registered"
            )));
        }
        self.factories.insert(tag, Box::new(factory));
        Ok(())
    }

    pub fn create(&self, tag: &str, style: &SliceStyle) -> ChartResult<Box<dyn SliceRenderer>> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| ChartError::UnknownRenderer(tag.to_owned()))?;
        Ok(factory(style))
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for SliceRendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceRendererRegistry")
            .field("tags", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
