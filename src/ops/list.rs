use tracing::{debug, info};

use crate::model::{FilterMode, Task, TaskId};

use super::drag::DragState;
use super::filter::{FilterCounts, filter_tasks};
use super::store::TaskStore;

/// The task list as the UI sees it: the store, the current filter and the
/// drag gesture, kept consistent with each other.
///
/// Nothing here fails loudly. Invalid input (blank text, unknown ids,
/// stale slot indices) leaves everything as it was.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    store: TaskStore,
    filter: FilterMode,
    drag: DragState,
}

impl TaskList {
    pub fn new(filter: FilterMode) -> Self {
        TaskList {
            store: TaskStore::new(),
            filter,
            drag: DragState::Idle,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The committed canonical sequence
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.counts().completed
    }

    /// Per-mode counts over the committed sequence
    pub fn counts(&self) -> FilterCounts {
        FilterCounts::of(self.store.tasks())
    }

    /// The sequence to render: the filtered preview while one exists,
    /// otherwise the filtered canonical sequence.
    pub fn visible(&self) -> Vec<Task> {
        match self.drag.preview_order(self.store.tasks(), self.filter) {
            Some(preview) => filter_tasks(&preview, self.filter),
            None => filter_tasks(self.store.tasks(), self.filter),
        }
    }

    // -----------------------------------------------------------------------
    // Store operations
    // -----------------------------------------------------------------------

    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        self.store.add(text)
    }

    /// Flip a task's completion. A running drag loses its preview since
    /// the filtered slots may have shifted, and is cancelled outright when
    /// the dragged task itself drops out of the view.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let toggled = self.store.toggle(id);
        if toggled {
            let hidden = self.store.get(id).is_some_and(|t| !self.filter.matches(t));
            if self.drag.dragged() == Some(id) && hidden {
                self.drag.cancel();
            } else {
                self.drag.discard_preview();
            }
        }
        toggled
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.drag.invalidate(id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.drag.cancel();
        self.store.clear();
        info!("all tasks cleared");
    }

    /// Switch filter mode. Cancels a running drag.
    pub fn set_filter(&mut self, mode: FilterMode) {
        if mode == self.filter {
            return;
        }
        self.drag.cancel();
        self.filter = mode;
        debug!(%mode, "filter changed");
    }

    // -----------------------------------------------------------------------
    // Gesture events (slot indices are in the rendered filtered list)
    // -----------------------------------------------------------------------

    pub fn start_drag(&mut self, id: TaskId) -> bool {
        self.drag.start(&self.store, id)
    }

    pub fn hover_enter(&mut self, index: usize) {
        self.drag.hover_enter(self.store.tasks(), self.filter, index);
    }

    pub fn hover_leave(&mut self) {
        self.drag.hover_leave();
    }

    /// Returns true when the drop changed the canonical order
    pub fn drop_at(&mut self, index: usize) -> bool {
        let moved = self.drag.drop_on(&mut self.store, self.filter, index);
        if moved {
            info!(index, "task reordered");
        }
        moved
    }

    pub fn end_drag(&mut self) {
        self.drag.cancel();
    }
}
