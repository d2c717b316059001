use tracing::{debug, warn};

use crate::model::{FilterMode, Task, TaskId};

use super::filter::filtered_index;
use super::preview::project;
use super::store::TaskStore;

/// Drag-to-reorder gesture state.
///
/// Indices are slots of the filtered view the user is looking at. The
/// preview ordering itself is never stored; only the slot it was computed
/// for is, and the ordering is re-projected from the store on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: TaskId,
        /// Slot the pointer is currently over
        hover: Option<usize>,
        /// Slot the current preview was projected for, if any
        preview: Option<usize>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn dragged(&self) -> Option<TaskId> {
        match self {
            DragState::Dragging { dragged, .. } => Some(*dragged),
            DragState::Idle => None,
        }
    }

    pub fn hover(&self) -> Option<usize> {
        match self {
            DragState::Dragging { hover, .. } => *hover,
            DragState::Idle => None,
        }
    }

    pub fn has_preview(&self) -> bool {
        matches!(self, DragState::Dragging { preview: Some(_), .. })
    }

    /// Begin dragging `id`. An already running gesture is cancelled first.
    /// Ids not present in the store leave the state idle.
    pub fn start(&mut self, store: &TaskStore, id: TaskId) -> bool {
        if let Some(previous) = self.dragged() {
            debug!(%previous, "drag superseded by new drag");
            self.cancel();
        }
        if !store.contains(id) {
            debug!(%id, "drag start ignored: unknown task");
            return false;
        }
        *self = DragState::Dragging {
            dragged: id,
            hover: None,
            preview: None,
        };
        debug!(%id, "drag started");
        true
    }

    /// Pointer entered slot `index` of the filtered view.
    pub fn hover_enter(&mut self, tasks: &[Task], mode: FilterMode, index: usize) {
        let DragState::Dragging {
            dragged,
            hover,
            preview,
        } = self
        else {
            return;
        };
        let visible = tasks.iter().filter(|t| mode.matches(t)).count();
        if index >= visible {
            debug!(index, visible, "hover ignored: slot out of range");
            return;
        }
        let Some(task) = tasks.iter().find(|t| t.id == *dragged) else {
            return;
        };

        *hover = Some(index);
        *preview = if filtered_index(tasks, mode, task) == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(index, preview = preview.is_some(), "drag hover");
    }

    /// Pointer left the hovered slot. The preview stays until the next
    /// hover or the end of the gesture.
    pub fn hover_leave(&mut self) {
        if let DragState::Dragging { hover, .. } = self {
            *hover = None;
        }
    }

    /// Drop on slot `index`. Commits the projected order when the slot is
    /// valid, then returns to idle whatever the outcome. Returns true when
    /// the canonical order changed.
    pub fn drop_on(&mut self, store: &mut TaskStore, mode: FilterMode, index: usize) -> bool {
        let DragState::Dragging { dragged, .. } = std::mem::take(self) else {
            return false;
        };

        let visible = store.tasks().iter().filter(|t| mode.matches(t)).count();
        if index >= visible {
            debug!(%dragged, index, "drop outside the list treated as cancel");
            return false;
        }

        let new_order = project(store.tasks(), dragged, index, mode);
        if new_order.as_slice() == store.tasks() {
            debug!(%dragged, index, "drop on own slot");
            return false;
        }
        match store.commit_reorder(new_order) {
            Ok(()) => {
                debug!(%dragged, index, "drop committed");
                true
            }
            Err(e) => {
                warn!(%dragged, index, error = %e, "drop rejected");
                false
            }
        }
    }

    /// Gesture ended without a drop. Any preview is discarded.
    pub fn cancel(&mut self) {
        if let Some(dragged) = self.dragged() {
            debug!(%dragged, "drag cancelled");
        }
        *self = DragState::Idle;
    }

    /// Force back to idle if `id` is the dragged task
    pub fn invalidate(&mut self, id: TaskId) {
        if self.dragged() == Some(id) {
            self.cancel();
        }
    }

    /// Forget the preview but keep the gesture running
    pub fn discard_preview(&mut self) {
        if let DragState::Dragging { preview, .. } = self {
            *preview = None;
        }
    }

    /// The full canonical order the preview shows, if a preview is active
    pub fn preview_order(&self, tasks: &[Task], mode: FilterMode) -> Option<Vec<Task>> {
        match self {
            DragState::Dragging {
                dragged,
                preview: Some(target),
                ..
            } => Some(project(tasks, *dragged, *target, mode)),
            _ => None,
        }
    }
}
