use crate::model::{FilterMode, Task, TaskId};

use super::filter::filtered_index;

/// Compute the canonical order that results from dropping `dragged` on
/// slot `target` of the filtered view for `mode`.
///
/// `target` is the index the dragged task should occupy in the filtered
/// view afterwards; it is clamped to the last slot. Tasks hidden by the
/// filter keep their relative canonical order: a task moving down lands
/// right after the visible task that now precedes it, a task moving up
/// lands right before the visible task it displaces. Dropping a task on
/// its own slot, or dragging an id that is not in `tasks`, returns the
/// input order unchanged.
///
/// The result is always a permutation of `tasks`. Runs in O(n).
pub fn project(tasks: &[Task], dragged: TaskId, target: usize, mode: FilterMode) -> Vec<Task> {
    let Some(from) = tasks.iter().position(|t| t.id == dragged) else {
        return tasks.to_vec();
    };
    let current = filtered_index(tasks, mode, &tasks[from]);
    if current == Some(target) {
        return tasks.to_vec();
    }

    // Canonical positions of the other tasks visible under the filter
    let anchors: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(i, t)| *i != from && mode.matches(t))
        .map(|(i, _)| i)
        .collect();

    let insert_at = match anchors.last() {
        // Nothing visible to position against
        None => from,
        Some(&last) => {
            let target = target.min(anchors.len());
            if current.is_some_and(|c| target > c) {
                anchors[target - 1] + 1
            } else if target < anchors.len() {
                anchors[target]
            } else {
                last + 1
            }
        }
    };

    let mut out = Vec::with_capacity(tasks.len());
    for (i, task) in tasks.iter().enumerate() {
        if i == insert_at {
            out.push(tasks[from].clone());
        }
        if i != from {
            out.push(task.clone());
        }
    }
    if insert_at == tasks.len() {
        out.push(tasks[from].clone());
    }
    out
}
