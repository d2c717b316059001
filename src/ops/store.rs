use std::collections::HashMap;

use tracing::debug;

use crate::model::{Task, TaskId};

/// Error type for store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("reorder has {got} tasks, store has {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("reorder is not a permutation of the current tasks (offending task {0})")]
    NotAPermutation(TaskId),
}

/// Owner of the canonical task sequence.
///
/// Every mutation is applied whole or not at all: a task is never
/// duplicated or lost by any operation here.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// The canonical sequence, in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a task. Whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string()));
        debug!(%id, "task added");
        Some(id)
    }

    /// Flip `completed`. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(%id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// Delete a task. Returns false if the id is unknown.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!(%id, "task removed");
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!(count = self.tasks.len(), "store cleared");
        self.tasks.clear();
    }

    /// Replace the canonical sequence with a reordering of itself.
    ///
    /// `new_order` must contain exactly the current tasks (same ids, same
    /// field values), only in a different order. Anything else is rejected
    /// and the store is left untouched.
    pub fn commit_reorder(&mut self, new_order: Vec<Task>) -> Result<(), StoreError> {
        if new_order.len() != self.tasks.len() {
            return Err(StoreError::LengthMismatch {
                expected: self.tasks.len(),
                got: new_order.len(),
            });
        }

        let mut current: HashMap<TaskId, &Task> =
            self.tasks.iter().map(|t| (t.id, t)).collect();
        for task in &new_order {
            // Removing as we go catches duplicates as well as strangers
            match current.remove(&task.id) {
                Some(existing) if existing == task => {}
                _ => return Err(StoreError::NotAPermutation(task.id)),
            }
        }

        self.tasks = new_order;
        debug!(count = self.tasks.len(), "reorder committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sample_store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add("A");
        store.add("B");
        store.add("C");
        store
    }

    fn texts(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut store = TaskStore::new();
        let id = store.add("  buy milk  ").unwrap();
        assert_eq!(store.len(), 1);
        let task = store.get(id).unwrap();
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut store = sample_store();
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   \t "), None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut store = TaskStore::new();
        let ids: Vec<TaskId> = (0..100).filter_map(|i| store.add(&format!("t{}", i))).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        store.remove(a);
        let b = store.add("b").unwrap();
        assert_ne!(a, b);

        store.clear();
        let c = store.add("c").unwrap();
        assert!(c > b);
    }

    #[test]
    fn test_default_store_allocates_ids() {
        let mut store = TaskStore::default();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle() {
        let mut store = sample_store();
        let b = store.tasks()[1].id;
        assert!(store.toggle(b));
        assert!(store.get(b).unwrap().completed);
        assert!(store.toggle(b));
        assert!(!store.get(b).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut store = sample_store();
        let before = store.tasks().to_vec();
        assert!(!store.toggle(TaskId::new(999)));
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_remove() {
        let mut store = sample_store();
        let b = store.tasks()[1].id;
        assert!(store.remove(b));
        assert_eq!(texts(&store), vec!["A", "C"]);
        assert!(!store.remove(b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut store = sample_store();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_reorder_permutation() {
        let mut store = sample_store();
        let mut order = store.tasks().to_vec();
        order.reverse();
        store.commit_reorder(order).unwrap();
        assert_eq!(texts(&store), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_commit_reorder_rejects_wrong_length() {
        let mut store = sample_store();
        let order = store.tasks()[..2].to_vec();
        assert_eq!(
            store.commit_reorder(order),
            Err(StoreError::LengthMismatch {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(texts(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_commit_reorder_rejects_duplicates() {
        let mut store = sample_store();
        let tasks = store.tasks();
        let order = vec![tasks[0].clone(), tasks[0].clone(), tasks[2].clone()];
        let a = tasks[0].id;
        assert_eq!(
            store.commit_reorder(order),
            Err(StoreError::NotAPermutation(a))
        );
        assert_eq!(texts(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_commit_reorder_rejects_altered_values() {
        let mut store = sample_store();
        let mut order = store.tasks().to_vec();
        order.swap(0, 1);
        order[0].completed = true;
        assert!(store.commit_reorder(order).is_err());
        assert!(store.tasks().iter().all(|t| !t.completed));
        assert_eq!(texts(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_commit_reorder_rejects_unknown_task() {
        let mut store = sample_store();
        let mut order = store.tasks().to_vec();
        order[2] = Task::new(TaskId::new(42), "C".into());
        assert_eq!(
            store.commit_reorder(order),
            Err(StoreError::NotAPermutation(TaskId::new(42)))
        );
    }

    fn store_from_flags(flags: &[bool]) -> TaskStore {
        let mut store = TaskStore::new();
        for (i, &done) in flags.iter().enumerate() {
            if let Some(id) = store.add(&format!("t{}", i))
                && done
            {
                store.toggle(id);
            }
        }
        store
    }

    /// Reorder `tasks` by sorting on the generated keys
    fn shuffled(tasks: &[Task], keys: &[u32]) -> Vec<Task> {
        let mut keyed: Vec<(u32, Task)> = tasks
            .iter()
            .cloned()
            .zip(keys.iter().cycle())
            .map(|(t, &k)| (k, t))
            .collect();
        keyed.sort_by_key(|(k, t)| (*k, t.id));
        keyed.into_iter().map(|(_, t)| t).collect()
    }

    proptest! {
        #[test]
        fn commit_accepts_any_permutation(
            flags in proptest::collection::vec(any::<bool>(), 0..12),
            keys in proptest::collection::vec(any::<u32>(), 1..12),
        ) {
            let mut store = store_from_flags(&flags);
            let order = shuffled(store.tasks(), &keys);
            prop_assert!(store.commit_reorder(order.clone()).is_ok());
            prop_assert_eq!(store.tasks(), &order[..]);
        }

        #[test]
        fn commit_rejects_non_permutations(
            flags in proptest::collection::vec(any::<bool>(), 2..12),
            keys in proptest::collection::vec(any::<u32>(), 1..12),
            kind in 0usize..4,
            pick in 0usize..12,
        ) {
            let mut store = store_from_flags(&flags);
            let before = store.tasks().to_vec();
            let mut order = shuffled(&before, &keys);
            let i = pick % order.len();
            match kind {
                0 => {
                    order.remove(i);
                }
                1 => {
                    let j = (i + 1) % order.len();
                    order[j] = order[i].clone();
                }
                2 => order[i] = Task::new(TaskId::new(10_000), order[i].text.clone()),
                _ => order[i].completed = !order[i].completed,
            }

            prop_assert!(store.commit_reorder(order).is_err());
            prop_assert_eq!(store.tasks(), &before[..]);
        }
    }
}
