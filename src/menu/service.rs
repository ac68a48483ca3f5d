//! Menu service
//!
//! Keeps the UI's cached food list consistent with the backend. Every
//! mutation goes through the backend first; the cache is only updated
//! with what the backend confirmed. Edits never mutate a cached plate in
//! place: a merged copy is built, stored, and swapped in.

use std::sync::{Arc, RwLock};

use crate::observability::{Event, Logger};

use super::backend::{BackendError, BackendResult, FoodBackend};
use super::food::{FoodInput, FoodPlate};

/// Collection-level operations over the menu, one instance per dashboard.
pub struct MenuService<B: FoodBackend> {
    backend: Arc<B>,
    foods: RwLock<Vec<FoodPlate>>,
}

impl<B: FoodBackend> MenuService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            foods: RwLock::new(Vec::new()),
        }
    }

    /// Replace the cached list with the backend's current contents.
    ///
    /// Returns the number of plates loaded.
    pub fn load(&self) -> BackendResult<usize> {
        let foods = self.backend.list()?;
        let count = foods.len();

        *self.write_cache()? = foods;
        let count_field = count.to_string();
        Logger::info(Event::FoodsLoaded.name(), &[("count", count_field.as_str())]);

        Ok(count)
    }

    /// Snapshot of the cached food list
    pub fn foods(&self) -> BackendResult<Vec<FoodPlate>> {
        Ok(self.read_cache()?.clone())
    }

    /// Create a plate from a validated input. New plates start available.
    pub fn add_food(&self, input: &FoodInput) -> BackendResult<FoodPlate> {
        let created = self.backend.create(input, true)?;

        self.write_cache()?.push(created.clone());
        let id_field = created.id.to_string();
        Logger::info(Event::FoodAdded.name(), &[("id", id_field.as_str())]);

        Ok(created)
    }

    /// Apply a validated input to the plate with this id.
    ///
    /// The stored plate's `id` and `available` survive the merge.
    pub fn update_food(&self, id: u64, input: &FoodInput) -> BackendResult<FoodPlate> {
        let stored = self.find(id)?;
        let merged = stored.merge(input);
        let updated = self.backend.update(&merged)?;

        self.replace(updated.clone())?;
        let id_field = id.to_string();
        Logger::info(Event::FoodUpdated.name(), &[("id", id_field.as_str())]);

        Ok(updated)
    }

    /// Remove the plate with this id from the backend and the cache
    pub fn delete_food(&self, id: u64) -> BackendResult<()> {
        self.backend.delete(id)?;

        self.write_cache()?.retain(|f| f.id != id);
        let id_field = id.to_string();
        Logger::info(Event::FoodDeleted.name(), &[("id", id_field.as_str())]);

        Ok(())
    }

    /// Flip a plate's availability
    pub fn toggle_available(&self, id: u64) -> BackendResult<FoodPlate> {
        let toggled = self.find(id)?.toggled();
        let updated = self.backend.update(&toggled)?;

        self.replace(updated.clone())?;
        let available_field = updated.available.to_string();
        let id_field = id.to_string();
        Logger::info(
            Event::FoodToggled.name(),
            &[
                ("available", available_field.as_str()),
                ("id", id_field.as_str()),
            ],
        );

        Ok(updated)
    }

    fn find(&self, id: u64) -> BackendResult<FoodPlate> {
        self.read_cache()?
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(BackendError::NotFound(id))
    }

    fn replace(&self, food: FoodPlate) -> BackendResult<()> {
        let mut cache = self.write_cache()?;
        if let Some(stored) = cache.iter_mut().find(|f| f.id == food.id) {
            *stored = food;
        }
        Ok(())
    }

    fn read_cache(&self) -> BackendResult<std::sync::RwLockReadGuard<'_, Vec<FoodPlate>>> {
        self.foods
            .read()
            .map_err(|_| BackendError::Internal("lock poisoned".to_string()))
    }

    fn write_cache(&self) -> BackendResult<std::sync::RwLockWriteGuard<'_, Vec<FoodPlate>>> {
        self.foods
            .write()
            .map_err(|_| BackendError::Internal("lock poisoned".to_string()))
    }
}
