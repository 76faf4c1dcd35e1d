//! Task collection store and its persistence lifecycle.
//!
//! The store is the single source of truth for the task collection. It keeps
//! tasks in memory, ordered newest-first, and rewrites the entire collection
//! to a single JSON document after every successful mutation, so a subsequent
//! load always observes the latest state.
//!
//! ## Persistence Contract
//!
//! - One file, `tasks.json`, in the platform application-data directory
//! - `save` is a full overwrite, never an incremental update
//! - A missing or unparsable file silently falls back to the seed collection;
//!   there is no version field and no migration path
//!
//! ## Mutation Contract
//!
//! - `create` ignores titles that are empty after trimming
//! - `toggle` and `delete` are silent no-ops for unknown ids
//! - Write failures propagate; they are not swallowed

use crate::libs::data_storage::DataStorage;
use crate::libs::task::{Task, TaskFilter, TaskFrequency};
use anyhow::Result;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const STATE_FILE_NAME: &str = "tasks.json";

/// Example tasks shown on first launch, before anything has been saved.
fn seed_tasks() -> Vec<Task> {
    let deep_work = Task::new("Deep Work Session (2h)", TaskFrequency::Daily);
    let mut review = Task::new("Review Weekly Metrics", TaskFrequency::Weekly);
    review.completed = true;
    let server_bill = Task::new("Pay Server Bill", TaskFrequency::Monthly);

    vec![deep_work, review, server_bill]
}

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Opens the store, loading the saved collection or the seed set.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        let tasks = Self::load(&path);

        Ok(TaskStore { path, tasks })
    }

    fn load(path: &Path) -> Vec<Task> {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| seed_tasks()),
            Err(_) => seed_tasks(),
        }
    }

    /// Prepends a new task and persists the collection.
    ///
    /// Returns `None` without touching the collection when the trimmed title
    /// is empty.
    pub fn create(&mut self, title: &str, frequency: TaskFrequency) -> Result<Option<&Task>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        self.tasks.insert(0, Task::new(title, frequency));
        self.save()?;

        Ok(self.tasks.first())
    }

    /// Flips completion of the task with the given id and persists.
    ///
    /// Returns the toggled task, or `None` when no task has that id.
    pub fn toggle(&mut self, id: &str) -> Result<Option<Task>> {
        let task = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle();
                task.clone()
            }
            None => return Ok(None),
        };
        self.save()?;

        Ok(Some(task))
    }

    /// Removes the task with the given id and persists.
    ///
    /// Returns `false` when no task has that id; the collection is untouched
    /// and nothing is written.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.save()?;

        Ok(true)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Stable-order read of the collection through a filter.
    pub fn tasks(&self, filter: TaskFilter) -> Vec<Task> {
        match filter {
            TaskFilter::All => self.tasks.clone(),
            TaskFilter::ByFrequency(frequency) => self.tasks.iter().filter(|t| t.frequency == frequency).cloned().collect(),
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, &self.tasks)?;
        Ok(())
    }
}
