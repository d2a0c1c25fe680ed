use std::{cell::RefCell, collections::HashMap, rc::Rc};

use tracing::{debug, warn};

use crate::{error::StoreError, workout::Workout};

/// A durable string key-value store, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same contents, so a clone handed to a
/// second controller sees what the first one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The workout collection persisted as one JSON array under a single key.
pub struct WorkoutStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Overwrites the stored snapshot with the full collection.
    pub fn save(&mut self, workouts: &[Workout]) -> crate::error::Result<()> {
        let json = serde_json::to_string(workouts)?;
        self.backend.set(&self.key, &json)?;
        debug!("Saved {} workouts", workouts.len());
        Ok(())
    }

    /// Missing, unreadable and corrupt data all read as an empty collection.
    pub fn load(&self) -> Vec<Workout> {
        let json = match self.backend.get(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Could not read stored workouts: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Workout>>>(&json) {
            Ok(workouts) => workouts.unwrap_or_default(),
            Err(e) => {
                warn!("Ignoring corrupt stored workouts: {e}");
                Vec::new()
            }
        }
    }

    pub fn clear(&mut self) -> crate::error::Result<()> {
        self.backend.remove(&self.key)?;
        Ok(())
    }
}
