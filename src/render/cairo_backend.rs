use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::deg_to_rad;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, SlicePrimitive, SliceShape, TextHAlign};

/// Cairo has no blur; shadows are painted as a translucent copy of the slice.
const SHADOW_ALPHA_SCALE: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub slices_drawn: usize,
    pub slices_skipped: usize,
    pub shadows_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for slice in &frame.slices {
            if let Some(shadow) = slice.shadow {
                if append_slice_path(context, slice, 0.0, shadow.offset_y) {
                    let mut color = shadow.color;
                    color.alpha *= SHADOW_ALPHA_SCALE;
                    apply_color(context, color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill slice shadow", err))?;
                    stats.shadows_drawn += 1;
                }
            }

            if !append_slice_path(context, slice, 0.0, 0.0) {
                stats.slices_skipped += 1;
                continue;
            }
            apply_color(context, slice.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill slice", err))?;
            stats.slices_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            // pango lays out from the top-left corner, primitives carry the baseline
            context.move_to(x, text.y - f64::from(text_height));
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Appends the slice outline; returns `false` when spacing leaves nothing to draw.
fn append_slice_path(context: &Context, slice: &SlicePrimitive, dx: f64, dy: f64) -> bool {
    let cx = slice.cx + slice.offset_x + dx;
    let cy = slice.cy + slice.offset_y + dy;
    let start = deg_to_rad(slice.start_angle);
    let sweep = deg_to_rad(slice.sweep_angle);
    let outer = slice.shape.outer_radius();
    if outer <= 0.0 || sweep <= 0.0 {
        return false;
    }

    let outer_pad = slice.inset / outer;
    if sweep - 2.0 * outer_pad <= 0.0 {
        return false;
    }

    context.new_path();
    match slice.shape {
        SliceShape::Sector { .. } => {
            let half = sweep / 2.0;
            let apex_shift = if slice.inset > 0.0 && half.sin() > 0.0 {
                (slice.inset / half.sin()).min(outer)
            } else {
                0.0
            };
            let middle = start + half;
            context.move_to(cx + apex_shift * middle.cos(), cy + apex_shift * middle.sin());
            context.arc(cx, cy, outer, start + outer_pad, start + sweep - outer_pad);
        }
        SliceShape::Ring { inner_radius, .. } => {
            context.arc(cx, cy, outer, start + outer_pad, start + sweep - outer_pad);
            if inner_radius > 0.0 {
                let inner_pad = (slice.inset / inner_radius).min(sweep / 2.0);
                context.arc_negative(
                    cx,
                    cy,
                    inner_radius,
                    start + sweep - inner_pad,
                    start + inner_pad,
                );
            } else {
                context.line_to(cx, cy);
            }
        }
    }
    context.close_path();
    true
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
