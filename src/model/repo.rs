use crate::model::{ModelManager, error::ModelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Lesson,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lesson => write!(f, "lesson"),
        }
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Id-addressed CRUD over a resource held by the [`ModelManager`].
///
/// Every method is a single atomic step against the backing store; lookups
/// that miss fail with [`crate::model::ModelError::NotFound`].
#[async_trait::async_trait]
pub trait CrudRepository<T, Create, Update, V>
where
    T: ResourceTyped,
    V: Clone + Copy,
{
    async fn create(mm: &ModelManager, data: Create) -> T;

    async fn update_by_id(mm: &ModelManager, id: V, data: Update) -> ModelResult<T>;

    async fn delete_by_id(mm: &ModelManager, id: V) -> ModelResult<()>;

    async fn find_by_id(mm: &ModelManager, id: V) -> ModelResult<T>;

    async fn list(mm: &ModelManager) -> Vec<T>;
}
