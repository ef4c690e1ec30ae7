// File: ./src/store.rs
use crate::config::Config;
use crate::error::StoreError;
use crate::model::{Priority, SortKey, Task};
use crate::storage::LocalStorage;
use std::path::{Path, PathBuf};

/// Result of [`TaskStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub name: String,
    pub priority: Priority,
    /// The requested priority was not recognised and `Low` was used.
    pub priority_defaulted: bool,
}

/// Result of [`TaskStore::edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    pub old_name: String,
    pub name: String,
    pub priority: Priority,
    /// The requested priority was not recognised and the old one was kept.
    pub priority_kept: bool,
}

/// Result of [`TaskStore::mark_completed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Marked(String),
    AlreadyCompleted(String),
}

/// The ordered task list and the file it is mirrored to.
///
/// Tasks are addressed by their current position. Every accepted mutation
/// rewrites the whole file before returning; if that write fails the list is
/// restored and [`StoreError::Storage`] is returned.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Loads the list from `path`. Never fails: see [`LocalStorage::load`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = LocalStorage::load(&path);
        Self { path, tasks }
    }

    /// Opens the data file the configuration points at.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::open(config.data_path()?))
    }

    /// Trims `name` and rejects it when nothing is left. Front-ends call this
    /// to refuse a name before asking for further fields.
    pub fn check_name(name: &str) -> Result<&str, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            Err(StoreError::EmptyName)
        } else {
            Ok(name)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
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

    pub fn get(&self, index: usize) -> Result<&Task, StoreError> {
        self.tasks.get(index).ok_or(StoreError::InvalidIndex(index))
    }

    pub fn add(&mut self, name: &str, priority: &str) -> Result<Added, StoreError> {
        let name = Self::check_name(name)?;
        let parsed = Priority::parse(priority);
        let priority_defaulted = parsed.is_none();
        let priority = parsed.unwrap_or_default();

        self.commit(|tasks| tasks.push(Task::new(name, priority.clone())))?;
        log::info!("Added task '{}' ({})", name, priority);
        Ok(Added {
            name: name.to_string(),
            priority,
            priority_defaulted,
        })
    }

    pub fn edit(&mut self, index: usize, name: &str, priority: &str) -> Result<Edited, StoreError> {
        let current = self.get(index)?;
        let name = Self::check_name(name)?;
        let parsed = Priority::parse(priority);
        let priority_kept = parsed.is_none();
        let priority = parsed.unwrap_or_else(|| current.priority.clone());
        let old_name = current.name.clone();

        self.commit(|tasks| {
            let task = &mut tasks[index];
            task.name = name.to_string();
            task.priority = priority.clone();
        })?;
        log::info!("Edited task {}: '{}' -> '{}' ({})", index, old_name, name, priority);
        Ok(Edited {
            old_name,
            name: name.to_string(),
            priority,
            priority_kept,
        })
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, StoreError> {
        self.get(index)?;
        let removed = self.commit(|tasks| tasks.remove(index))?;
        log::info!("Deleted task {}: '{}'", index, removed.name);
        Ok(removed)
    }

    pub fn mark_completed(&mut self, index: usize) -> Result<Completion, StoreError> {
        let task = self.get(index)?;
        if task.completed {
            return Ok(Completion::AlreadyCompleted(task.name.clone()));
        }
        let name = task.name.clone();
        self.commit(|tasks| tasks[index].completed = true)?;
        log::info!("Completed task {}: '{}'", index, name);
        Ok(Completion::Marked(name))
    }

    pub fn sort(&mut self, key: SortKey) -> Result<(), StoreError> {
        self.commit(|tasks| key.apply(tasks))?;
        log::info!("Sorted {} task(s) by {}", self.tasks.len(), key);
        Ok(())
    }

    /// Applies `change`, then persists. A failed write rolls the list back.
    fn commit<F, T>(&mut self, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Vec<Task>) -> T,
    {
        let snapshot = self.tasks.clone();
        let value = change(&mut self.tasks);
        if let Err(source) = LocalStorage::save(&self.path, &self.tasks) {
            log::error!("Save to {} failed: {:#}", self.path.display(), source);
            self.tasks = snapshot;
            return Err(StoreError::Storage {
                path: self.path.clone(),
                source,
            });
        }
        Ok(value)
    }
}
