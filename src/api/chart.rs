use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::animation::TrackStep;
use crate::core::{ChartGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::{
    ApproxTextMeasurer, Renderer, SliceRenderer, SliceRendererRegistry, SliceStyle, TextMeasurer,
};

use super::{
    AnimationConfig, LabelConfig, ModelStep, PieChartConfig, PieChartModel, SharedDataSetAdapter,
    Subscription,
};

/// Identifier returned by `PieChart::add_selection_listener`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionListenerId(pub(super) u64);

pub(super) type SelectionListener = Box<dyn FnMut(Option<usize>, Option<usize>)>;

/// Adapter currently bound to the chart with its change subscription.
pub(super) struct AdapterBinding {
    pub(super) adapter: SharedDataSetAdapter,
    pub(super) subscription: Subscription,
    pub(super) pending: Rc<Cell<bool>>,
}

/// Main facade consumed by host applications.
///
/// `PieChart` binds a data set adapter to the animated chart model, resolves
/// pointer input to slices and hands backend-agnostic frames to the renderer.
/// The host owns the clock and calls `tick` once per frame.
pub struct PieChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PieChartConfig,
    pub(super) model: PieChartModel,
    pub(super) interaction: InteractionState,
    pub(super) registry: SliceRendererRegistry,
    pub(super) slice_renderer: Option<Box<dyn SliceRenderer>>,
    pub(super) text_measurer: Box<dyn TextMeasurer>,
    pub(super) adapter: Option<AdapterBinding>,
    pub(super) selection_listeners: Vec<(SelectionListenerId, SelectionListener)>,
    pub(super) next_listener_id: u64,
}

impl<R: Renderer> PieChart<R> {
    pub fn new(renderer: R, config: PieChartConfig) -> ChartResult<Self> {
        Self::with_registry(renderer, config, SliceRendererRegistry::with_builtins())
    }

    /// Creates a chart resolving `config.slice_renderer` through `registry`.
    ///
    /// An unknown renderer tag is logged and leaves the chart without a slice
    /// renderer; hit-testing and selection keep working.
    pub fn with_registry(
        renderer: R,
        config: PieChartConfig,
        registry: SliceRendererRegistry,
    ) -> ChartResult<Self> {
        config.validate()?;

        let mut chart = Self {
            renderer,
            config,
            model: PieChartModel::new(),
            interaction: InteractionState::default(),
            registry,
            slice_renderer: None,
            text_measurer: Box::new(ApproxTextMeasurer::default()),
            adapter: None,
            selection_listeners: Vec::new(),
            next_listener_id: 0,
        };
        chart.rebuild_slice_renderer();
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    #[must_use]
    pub fn model(&self) -> &PieChartModel {
        &self.model
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn rotation_angle(&self) -> f64 {
        self.config.rotation_angle
    }

    pub fn set_rotation_angle(&mut self, rotation_angle: f64) -> ChartResult<()> {
        if !rotation_angle.is_finite() {
            return Err(ChartError::InvalidData(
                "rotation angle must be finite".to_owned(),
            ));
        }
        self.config.rotation_angle = rotation_angle;
        Ok(())
    }

    pub fn set_data_set_animation(&mut self, animation: AnimationConfig) -> ChartResult<()> {
        animation.interpolator.validate()?;
        self.config.data_set_animation = animation;
        Ok(())
    }

    pub fn set_selection_animation(&mut self, animation: AnimationConfig) -> ChartResult<()> {
        animation.interpolator.validate()?;
        self.config.selection_animation = animation;
        Ok(())
    }

    pub fn set_label_config(&mut self, labels: LabelConfig) -> ChartResult<()> {
        labels.validate()?;
        self.config.labels = labels;
        Ok(())
    }

    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.text_measurer = measurer;
    }

    /// Replaces the slice style and rebuilds the configured slice renderer.
    pub fn set_slice_style(&mut self, style: SliceStyle) -> ChartResult<()> {
        style.validate()?;
        self.config.slice_style = style;
        self.rebuild_slice_renderer();
        Ok(())
    }

    #[must_use]
    pub fn slice_renderer_registry(&self) -> &SliceRendererRegistry {
        &self.registry
    }

    pub fn register_slice_renderer(
        &mut self,
        tag: impl Into<String>,
        factory: impl Fn(&SliceStyle) -> Box<dyn SliceRenderer> + 'static,
    ) -> ChartResult<()> {
        self.registry.register(tag, factory)
    }

    /// Switches to the slice renderer registered under `tag`.
    ///
    /// Returns `false` when the tag is unknown; the chart then draws no
    /// slices until a renderer is set again.
    pub fn set_slice_renderer_kind(&mut self, tag: Option<&str>) -> bool {
        self.config.slice_renderer = tag.map(str::to_owned);
        self.rebuild_slice_renderer()
    }

    /// Installs a renderer instance directly, bypassing the registry.
    pub fn set_slice_renderer(&mut self, renderer: Option<Box<dyn SliceRenderer>>) {
        self.config.slice_renderer = renderer.as_ref().map(|renderer| renderer.kind().to_owned());
        self.slice_renderer = renderer;
    }

    #[must_use]
    pub fn slice_renderer_kind(&self) -> Option<&str> {
        self.slice_renderer.as_deref().map(|renderer| renderer.kind())
    }

    fn rebuild_slice_renderer(&mut self) -> bool {
        let Some(tag) = self.config.slice_renderer.as_deref() else {
            self.slice_renderer = None;
            return true;
        };
        match self.registry.create(tag, &self.config.slice_style) {
            Ok(renderer) => {
                debug!(kind = tag, "slice renderer resolved");
                self.slice_renderer = Some(renderer);
                true
            }
            Err(err) => {
                warn!(error = %err, "slice renderer lookup failed; slices will not be drawn");
                self.slice_renderer = None;
                false
            }
        }
    }

    /// Circle the chart is drawn into for the current viewport and labels.
    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        ChartGeometry::centered_in(
            self.config.viewport,
            self.config.padding,
            self.label_padding(),
        )
    }

    fn label_padding(&self) -> (f64, f64) {
        let labels = &self.config.labels;
        let mut horizontal = labels.padding_horizontal_px;
        let mut vertical = labels.padding_vertical_px;
        if let Some(reference) = labels.padding_reference_text.as_deref().filter(|_| labels.visible)
        {
            let size = self.text_measurer.measure(reference, labels.font_size_px);
            horizontal = horizontal.max(size.width);
            vertical = vertical.max(size.height);
        }
        (horizontal, vertical)
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.model.is_animating()
    }

    /// Advances both animation tracks by one frame.
    ///
    /// A pending adapter change is applied first, so its animation starts on
    /// this frame.
    pub fn tick(&mut self, delta: Duration) -> ModelStep {
        if self.has_pending_data_set_change() {
            if let Err(err) = self.sync_data_set() {
                warn!(error = %err, "deferring data set change to the next tick");
            }
        }

        let step = self.model.tick(delta);
        if step.data_set == TrackStep::Completed {
            trace!(slices = self.model.slice_count(), "data set animation completed");
        }
        if step.selection == TrackStep::Completed {
            trace!(
                selected = ?self.model.selected_index(),
                "selection animation completed"
            );
        }
        step
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by toolkit draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: crate::render::CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
