mod frame;
pub mod labels;
mod null_renderer;
mod primitives;
pub mod slice;

pub use frame::RenderFrame;
pub use labels::{
    ApproxTextMeasurer, LabelPlacement, LabelPosition, PlacedLabel, TextMeasurer, TextSize,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, ShadowPrimitive, SlicePrimitive, SliceShape, TextHAlign, TextPrimitive,
};
pub use slice::{
    RING_RENDERER, RingSliceRenderer, SliceRenderer, SliceRendererFactory,
    SliceRendererRegistry, SliceStyle, WEDGE_RENDERER, WedgeSliceRenderer,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart geometry and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
