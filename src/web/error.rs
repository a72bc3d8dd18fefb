use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::model::{ModelError, ResourceType};

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("ResourceNotFound: {resource_type:?}, id: {id}")]
    ResourceNotFound {
        resource_type: ResourceType,
        // raw path segment, it may not even be a number
        id: String,
    },
}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceNotFound { .. } => String::from("Item não encontrado"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("ResourceError - {0}")]
    ResourceError(#[from] ResourceError),
}

impl WebError {
    pub fn resource_not_found<S: Into<String>>(r#type: ResourceType, id: S) -> Self {
        Self::ResourceError(ResourceError::ResourceNotFound {
            resource_type: r#type,
            id: id.into(),
        })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceError(e) => e.status_code(),
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceError(e) => e.client_display(),
        }
    }
}

impl From<ModelError> for WebError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound { resource_type, id } => {
                Self::resource_not_found(resource_type, id.to_string())
            }
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message for the client
    pub message: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            crate::error::log_error(&self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = ErrorResponse {
            message: self.client_display(),
        };

        (status_code, Json(body)).into_response()
    }
}
