pub mod entity;

mod error;
pub use error::{ModelError, ModelResult};

mod repo;
pub use repo::{CrudRepository, ResourceType, ResourceTyped};

mod store;
pub use store::{IdPolicy, LessonStore};

#[derive(Debug, Clone)]
pub struct ModelManager {
    store: LessonStore, // cloning is cheap, store is just a wrapper around Arc<>
}

impl ModelManager {
    pub fn new(store: LessonStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LessonStore {
        &self.store
    }
}
