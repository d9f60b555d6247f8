use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{PieChart, SharedDataSetAdapter, chart::AdapterBinding};

impl<R: Renderer> PieChart<R> {
    /// Binds a new data set adapter, or unbinds the current one with `None`.
    ///
    /// The previous adapter's subscription is removed before the new adapter
    /// is subscribed, and the data set animation starts right away.
    pub fn set_adapter(&mut self, adapter: Option<SharedDataSetAdapter>) -> ChartResult<()> {
        if let Some(previous) = self.adapter.take() {
            match previous.adapter.try_borrow_mut() {
                Ok(mut previous_adapter) => {
                    previous_adapter
                        .observable_mut()
                        .unsubscribe(previous.subscription);
                }
                Err(err) => {
                    warn!(
                        error = %err,
                        "previous adapter is borrowed; its change subscription stays registered"
                    );
                }
            }
        }

        if let Some(adapter) = adapter {
            let pending = Rc::new(Cell::new(false));
            let subscription = {
                let mut bound = adapter.try_borrow_mut().map_err(|err| {
                    ChartError::AdapterUnavailable(format!("cannot subscribe to adapter: {err}"))
                })?;
                let flag = Rc::clone(&pending);
                bound.observable_mut().subscribe(move || flag.set(true))
            };
            debug!(subscription = subscription.id(), "data set adapter bound");
            self.adapter = Some(AdapterBinding {
                adapter,
                subscription,
                pending,
            });
        } else {
            debug!("data set adapter unbound");
        }

        self.apply_data_set()
    }

    #[must_use]
    pub fn adapter(&self) -> Option<&SharedDataSetAdapter> {
        self.adapter.as_ref().map(|binding| &binding.adapter)
    }

    /// Whether the adapter reported a change that has not been applied yet.
    #[must_use]
    pub fn has_pending_data_set_change(&self) -> bool {
        self.adapter
            .as_ref()
            .is_some_and(|binding| binding.pending.get())
    }

    /// Applies a pending adapter change immediately instead of on the next tick.
    ///
    /// Returns `true` when a change was applied.
    pub fn sync_data_set(&mut self) -> ChartResult<bool> {
        if !self.has_pending_data_set_change() {
            return Ok(false);
        }
        self.apply_data_set()?;
        Ok(true)
    }

    /// Snapshots adapter values and starts the data set animation towards them.
    fn apply_data_set(&mut self) -> ChartResult<()> {
        let values = match &self.adapter {
            Some(binding) => {
                let values = binding
                    .adapter
                    .try_borrow()
                    .map_err(|err| {
                        ChartError::AdapterUnavailable(format!("cannot read adapter values: {err}"))
                    })?
                    .values();
                binding.pending.set(false);
                values
            }
            None => Vec::new(),
        };

        debug!(count = values.len(), "data set changed");
        let animation = self.config.data_set_animation;
        self.model.set_data_set(&values, animation.duration(), animation.interpolator);
        Ok(())
    }

    /// Labels of the bound adapter, empty when there is none or it is busy.
    pub(super) fn adapter_labels(&self) -> Vec<String> {
        let Some(binding) = &self.adapter else {
            return Vec::new();
        };
        match binding.adapter.try_borrow() {
            Ok(adapter) => adapter.labels(),
            Err(err) => {
                warn!(error = %err, "adapter is borrowed; labels will not be drawn");
                Vec::new()
            }
        }
    }
}
