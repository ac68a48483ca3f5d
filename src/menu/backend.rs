//! Food backend collaborator
//!
//! Stand-in for the excluded REST layer: a trait covering the four
//! collection operations the menu performs, plus an in-memory
//! implementation used by tests and demos.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use thiserror::Error;

use super::food::{FoodInput, FoodPlate};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Backend errors.
///
/// Never overlaps with validation: by the time the backend is reached,
/// validation has already passed.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// No plate with this id
    #[error("food {0} not found")]
    NotFound(u64),

    /// Backend-side failure (the excluded network layer's territory)
    #[error("backend error: {0}")]
    Internal(String),
}

/// Collection operations over the food resource.
pub trait FoodBackend: Send + Sync {
    /// All plates, in insertion order
    fn list(&self) -> BackendResult<Vec<FoodPlate>>;

    /// Store a new plate built from the input; the backend assigns the id
    fn create(&self, input: &FoodInput, available: bool) -> BackendResult<FoodPlate>;

    /// Replace the plate with this id
    fn update(&self, food: &FoodPlate) -> BackendResult<FoodPlate>;

    /// Remove the plate with this id
    fn delete(&self, id: u64) -> BackendResult<()>;
}

/// In-memory backend with sequential ids.
pub struct InMemoryBackend {
    data: RwLock<Vec<FoodPlate>>,
    next_id: AtomicU64,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Backend seeded with existing plates
    pub fn with_foods(foods: Vec<FoodPlate>) -> Self {
        let next = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            data: RwLock::new(foods),
            next_id: AtomicU64::new(next),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodBackend for InMemoryBackend {
    fn list(&self) -> BackendResult<Vec<FoodPlate>> {
        let data = self
            .data
            .read()
            .map_err(|_| BackendError::Internal("lock poisoned".to_string()))?;
        Ok(data.clone())
    }

    fn create(&self, input: &FoodInput, available: bool) -> BackendResult<FoodPlate> {
        let mut data = self
            .data
            .write()
            .map_err(|_| BackendError::Internal("lock poisoned".to_string()))?;

        let plate = FoodPlate {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            image: input.image.clone(),
            available,
        };
        data.push(plate.clone());

        Ok(plate)
    }

    fn update(&self, food: &FoodPlate) -> BackendResult<FoodPlate> {
        let mut data = self
            .data
            .write()
            .map_err(|_| BackendError::Internal("lock poisoned".to_string()))?;

        let stored = data
            .iter_mut()
            .find(|f| f.id == food.id)
            .ok_or(BackendError::NotFound(food.id))?;
        *stored = food.clone();

        Ok(food.clone())
    }

    fn delete(&self, id: u64) -> BackendResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|_| BackendError::Internal("lock poisoned".to_string()))?;

        let before = data.len();
        data.retain(|f| f.id != id);
        if data.len() == before {
            return Err(BackendError::NotFound(id));
        }

        Ok(())
    }
}
