use thiserror::Error;

use crate::model::ResourceType;

pub type ModelResult<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("{resource_type} with id {id} not found")]
    NotFound { resource_type: ResourceType, id: i64 },
}

impl ModelError {
    pub fn not_found(resource_type: ResourceType, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }
}
