use tracing::warn;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::PieChart;

impl<R: Renderer> PieChart<R> {
    /// Materializes slice and label primitives for the current live geometry.
    ///
    /// A chart without data draws nothing once its last transition settled,
    /// so removing all data still animates the old slices out. Without a
    /// slice renderer only labels are drawn. Slices with non-finite angles (from malformed data
    /// values) are skipped.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        if self.model.is_empty() {
            return Ok(frame);
        }

        let geometry = self.geometry();
        let labels = &self.config.labels;
        let label_texts = if labels.visible {
            self.adapter_labels()
        } else {
            Vec::new()
        };
        let placement = labels.placement();

        if self.slice_renderer.is_none() {
            warn!("no slice renderer is set; slices will not be drawn");
        }

        for slice in self.model.slices(self.config.rotation_angle) {
            if !slice.start_angle.is_finite() || !slice.end_angle.is_finite() {
                warn!(index = slice.index, "skipping slice with non-finite angles");
                continue;
            }

            if let Some(renderer) = self.slice_renderer.as_deref() {
                frame.slices.push(renderer.draw_slice(
                    geometry,
                    slice.index,
                    slice.start_angle,
                    slice.end_angle,
                    slice.selection,
                ));
            }

            let Some(text) = label_texts.get(slice.index).filter(|text| !text.is_empty()) else {
                continue;
            };
            let size = self.text_measurer.measure(text, labels.font_size_px);
            let Some(mut placed) =
                placement.place(geometry, slice.start_angle, slice.end_angle, text, size)
            else {
                continue;
            };
            if let Some(renderer) = self.slice_renderer.as_deref() {
                let (dx, dy) =
                    renderer.transform(slice.start_angle, slice.end_angle, slice.selection);
                placed = placed.translated(dx, dy);
            }
            frame.texts.push(TextPrimitive::new(
                placed.text,
                placed.x,
                placed.y,
                labels.font_size_px,
                labels.color,
                TextHAlign::Left,
            ));
        }

        Ok(frame)
    }
}
