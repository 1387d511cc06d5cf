//! In-memory task collection.
//!
//! `TaskStore` holds tasks in insertion order and exposes the only operations
//! that create, change or destroy them. Every mutation that changes something
//! swaps in a freshly built collection value, so a snapshot taken before the
//! mutation keeps observing the old tasks and `Rc::ptr_eq` tells a reader
//! whether anything changed since its last look.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::fields::{Filter, Status};
use crate::task::{SeedTask, Task};

/// Ordered, session-scoped collection of tasks.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Rc<[Task]>,
    next_id: u64,
    revision: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TaskStore {
            tasks: Rc::from(Vec::new()),
            next_id: 1,
            revision: 0,
        }
    }

    /// Build a store from seed entries, assigning fresh ids.
    ///
    /// Entries with an empty name or description are skipped.
    pub fn from_seeds(seeds: Vec<SeedTask>) -> Self {
        let mut store = TaskStore::new();
        for (idx, seed) in seeds.into_iter().enumerate() {
            match store.add(&seed.name, &seed.description) {
                Some(id) => {
                    if seed.status != Status::default() {
                        store.set_status(id, seed.status);
                    }
                }
                None => warn!(entry = idx, "skipping seed entry with empty name or description"),
            }
        }
        store
    }

    /// Load seed entries from a JSON file. The file is only ever read.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let seeds: Vec<SeedTask> = serde_json::from_str(&data)?;
        info!(path = %path.display(), entries = seeds.len(), "loaded seed file");
        Ok(Self::from_seeds(seeds))
    }

    /// Append a new task with status `NotCompleted`.
    ///
    /// Returns `None` without touching the collection when either field is
    /// empty. The text is stored exactly as given.
    pub fn add(&mut self, name: &str, description: &str) -> Option<u64> {
        if name.is_empty() || description.is_empty() {
            debug!("add ignored: empty name or description");
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let mut tasks = self.tasks.to_vec();
        tasks.push(Task {
            id,
            name: name.to_string(),
            description: description.to_string(),
            status: Status::NotCompleted,
            created_at_utc: chrono::Utc::now().timestamp(),
        });
        self.replace(tasks);
        info!(task_id = id, "task added");
        Some(id)
    }

    /// Remove the task with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.get(id).is_none() {
            debug!(task_id = id, "remove ignored: no such task");
            return false;
        }
        let tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.replace(tasks);
        info!(task_id = id, "task removed");
        true
    }

    /// Set the status of the task with `id`. Returns false if there was none.
    pub fn set_status(&mut self, id: u64, status: Status) -> bool {
        let Some(current) = self.get(id) else {
            debug!(task_id = id, "set_status ignored: no such task");
            return false;
        };
        if current.status != status {
            self.replace_task(id, |t| t.status = status);
            info!(task_id = id, status = %status, "task status changed");
        }
        true
    }

    /// Replace name and description of the task with `id`, keeping id and status.
    ///
    /// Returns true when the task exists and the fields are non-empty, whether
    /// or not the text actually differed; false otherwise.
    pub fn update(&mut self, id: u64, name: &str, description: &str) -> bool {
        if name.is_empty() || description.is_empty() {
            debug!(task_id = id, "update ignored: empty name or description");
            return false;
        }
        let Some(current) = self.get(id) else {
            debug!(task_id = id, "update ignored: no such task");
            return false;
        };
        if current.name != name || current.description != description {
            self.replace_task(id, |t| {
                t.name = name.to_string();
                t.description = description.to_string();
            });
            info!(task_id = id, "task updated");
        }
        true
    }

    /// Lazily iterate tasks matching `criterion`, in insertion order.
    ///
    /// The iterator is `Clone`, so a caller can restart it without asking the
    /// store again.
    pub fn filter(&self, criterion: Filter) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.tasks.iter().filter(move |t| criterion.matches(t))
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The current collection value. Later mutations never alter it.
    pub fn snapshot(&self) -> Rc<[Task]> {
        Rc::clone(&self.tasks)
    }

    /// Number of times the collection value has been replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn replace_task(&mut self, id: u64, change: impl FnOnce(&mut Task)) {
        let mut tasks = self.tasks.to_vec();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            change(task);
        }
        self.replace(tasks);
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = Rc::from(tasks);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<u64> {
        tasks.map(|t| t.id).collect()
    }

    #[test]
    fn test_add_appends_not_completed_with_unique_id() {
        let mut store = TaskStore::new();
        let a = store.add("Buy milk", "2%  milk").unwrap();
        let b = store.add("Walk dog", "Around the block").unwrap();

        assert_eq!(store.len(), 2);
        assert_ne!(a, b);
        let task = store.get(a).unwrap();
        assert_eq!(task.status, Status::NotCompleted);
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.description, "2%  milk");
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("", "desc"), None);
        assert_eq!(store.add("name", ""), None);
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_add_stores_text_as_given() {
        let mut store = TaskStore::new();
        let blank = store.add(" ", "desc").unwrap();
        let padded = store.add("  Buy milk ", " 2% milk ").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(blank).unwrap().name, " ");
        let task = store.get(padded).unwrap();
        assert_eq!(task.name, "  Buy milk ");
        assert_eq!(task.description, " 2% milk ");

        assert!(store.update(padded, " x ", "  "));
        assert_eq!(store.get(padded).unwrap().name, " x ");
        assert_eq!(store.get(padded).unwrap().description, "  ");
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut store = TaskStore::new();
        let a = store.add("a", "a").unwrap();
        store.remove(a);
        let b = store.add("b", "b").unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = TaskStore::new();
        let a = store.add("a", "a").unwrap();
        let b = store.add("b", "b").unwrap();

        assert!(store.remove(a));
        let rev = store.revision();
        assert!(!store.remove(a));
        assert_eq!(store.revision(), rev);
        assert_eq!(ids(store.filter(Filter::All)), vec![b]);
    }

    #[test]
    fn test_set_status_reads_back() {
        let mut store = TaskStore::new();
        let a = store.add("a", "a").unwrap();

        assert!(store.set_status(a, Status::Completed));
        assert_eq!(store.get(a).unwrap().status, Status::Completed);
        assert!(store.set_status(a, Status::NotCompleted));
        assert_eq!(store.get(a).unwrap().status, Status::NotCompleted);
        assert!(!store.set_status(999, Status::Completed));
    }

    #[test]
    fn test_update_keeps_id_and_status() {
        let mut store = TaskStore::new();
        let a = store.add("a", "a").unwrap();
        store.set_status(a, Status::Completed);

        assert!(store.update(a, "renamed", "new desc"));
        let task = store.get(a).unwrap();
        assert_eq!(task.id, a);
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.name, "renamed");
        assert_eq!(task.description, "new desc");

        assert!(!store.update(999, "x", "y"));
        assert!(!store.update(a, "", "y"));
        assert_eq!(store.get(a).unwrap().name, "renamed");
    }

    #[test]
    fn test_filter_partitions_collection_in_order() {
        let mut store = TaskStore::new();
        let a = store.add("a", "a").unwrap();
        let b = store.add("b", "b").unwrap();
        let c = store.add("c", "c").unwrap();
        let d = store.add("d", "d").unwrap();
        store.set_status(b, Status::Completed);
        store.set_status(d, Status::Completed);

        assert_eq!(ids(store.filter(Filter::All)), vec![a, b, c, d]);
        let done = ids(store.filter(Filter::Completed));
        let open = ids(store.filter(Filter::NotCompleted));
        assert_eq!(done, vec![b, d]);
        assert_eq!(open, vec![a, c]);
        assert!(done.iter().all(|id| !open.contains(id)));
        assert_eq!(done.len() + open.len(), store.len());
    }

    #[test]
    fn test_filter_iterator_is_restartable() {
        let mut store = TaskStore::new();
        store.add("a", "a");
        store.add("b", "b");

        let iter = store.filter(Filter::All);
        let first: Vec<u64> = ids(iter.clone());
        let second: Vec<u64> = ids(iter);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutation_replaces_snapshot() {
        let mut store = TaskStore::new();
        let a = store.add("a", "a").unwrap();

        let before = store.snapshot();
        assert!(!store.remove(999));
        assert!(Rc::ptr_eq(&before, &store.snapshot()));
        assert!(store.set_status(a, Status::NotCompleted));
        assert!(Rc::ptr_eq(&before, &store.snapshot()));

        store.set_status(a, Status::Completed);
        assert!(!Rc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(before[0].status, Status::NotCompleted);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut store = TaskStore::new();
        assert!(store.is_empty());

        let id = store.add("Buy milk", "2%  milk").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().status, Status::NotCompleted);

        store.set_status(id, Status::Completed);
        assert_eq!(ids(store.filter(Filter::Completed)), vec![id]);
        assert_eq!(store.filter(Filter::NotCompleted).count(), 0);
    }

    #[test]
    fn test_from_seeds_skips_invalid_entries() {
        let seeds: Vec<SeedTask> = serde_json::from_str(
            r#"[
                {"name": "a", "description": "first"},
                {"name": "", "description": "no name"},
                {"name": "c", "description": "third", "status": "completed"}
            ]"#,
        )
        .unwrap();
        let store = TaskStore::from_seeds(seeds);

        assert_eq!(store.len(), 2);
        let names: Vec<&str> = store.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(store.tasks()[1].status, Status::Completed);
    }
}
