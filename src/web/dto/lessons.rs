use serde::{Deserialize, Serialize};

use crate::model::entity::{LessonCreate, LessonUpdate};

#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LessonCreateBody {
    /// Título da aula
    #[schema(example = "Aula de exemplo")]
    pub title: Option<String>,
    /// Conteúdo da aula
    #[schema(example = "Conteúdo da aula de exemplo")]
    pub content: Option<String>,
}

/// Empty or missing fields keep the stored value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LessonUpdateBody {
    /// Novo título da aula
    pub title: Option<String>,
    /// Novo conteúdo da aula
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl From<LessonCreateBody> for LessonCreate {
    fn from(body: LessonCreateBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
        }
    }
}

impl From<LessonUpdateBody> for LessonUpdate {
    fn from(body: LessonUpdateBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
        }
    }
}
