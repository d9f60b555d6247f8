use tracing::debug;

use crate::interaction::PointerEvent;
use crate::render::Renderer;

use super::{PieChart, SelectionListenerId};

impl<R: Renderer> PieChart<R> {
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.model.selected_index()
    }

    /// Selects slice `index` (`None` clears the selection).
    ///
    /// Selection listeners are notified synchronously with the previous and
    /// the new index; the weights then animate on subsequent ticks. An index
    /// outside the live slices animates every weight to zero.
    pub fn set_selection(&mut self, index: Option<usize>) {
        let animation = self.config.selection_animation;
        let previous = self
            .model
            .set_selection(index, animation.duration(), animation.interpolator);
        debug!(?previous, selected = ?index, "selection changed");
        for (_, listener) in &mut self.selection_listeners {
            listener(previous, index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    /// Registers a listener called with `(previous, selected)` on every selection.
    pub fn add_selection_listener(
        &mut self,
        listener: impl FnMut(Option<usize>, Option<usize>) + 'static,
    ) -> SelectionListenerId {
        let id = SelectionListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.selection_listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a selection listener. Returns `true` when removed.
    pub fn remove_selection_listener(&mut self, id: SelectionListenerId) -> bool {
        if let Some(position) = self
            .selection_listeners
            .iter()
            .position(|(entry, _)| *entry == id)
        {
            self.selection_listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn selection_listener_count(&self) -> usize {
        self.selection_listeners.len()
    }

    /// Slice index under the pointer, in chart-local coordinates.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> usize {
        let geometry = self.geometry();
        self.model.hit_test(
            PointerEvent::new(x, y),
            geometry.cx,
            geometry.cy,
            self.config.rotation_angle,
        )
    }

    /// Handles the end of a pointer gesture by selecting the slice under it.
    ///
    /// Returns the selected slice index.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> usize {
        let index = self.hit_test(x, y);
        self.interaction.on_pointer_up(PointerEvent::new(x, y), index);
        self.set_selection(Some(index));
        index
    }
}
