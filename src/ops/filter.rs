use crate::model::{FilterMode, Task};

/// Order-preserving subsequence of `tasks` selected by `mode`
pub fn filter_tasks(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    tasks.iter().filter(|t| mode.matches(t)).cloned().collect()
}

/// Position of a task within the filtered view, if it is visible there
pub fn filtered_index(tasks: &[Task], mode: FilterMode, task: &Task) -> Option<usize> {
    if !mode.matches(task) {
        return None;
    }
    tasks
        .iter()
        .filter(|t| mode.matches(t))
        .position(|t| t.id == task.id)
}

/// Number of tasks shown under each filter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl FilterCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        FilterCounts {
            all: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    pub fn get(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}
