use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{SlicePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Slices are listed in drawing order; labels are drawn after all slices.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub slices: Vec<SlicePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            slices: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_slice(mut self, slice: SlicePrimitive) -> Self {
        self.slices.push(slice);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for slice in &self.slices {
            slice.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty() && self.texts.is_empty()
    }
}
