use crate::model::repo::{CrudRepository, ResourceTyped};
use crate::model::{ModelManager, ResourceType, error::ModelResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Lessons every fresh store starts with, as `(id, title, content)`.
const SEED: [(i64, &str, &str); 7] = [
    (1, "Aula01", "Apresentação da disciplina"),
    (2, "Aula02", "Protocolo HTTP"),
    (3, "Aula03", "HTML"),
    (4, "Aula04", "CSS"),
    (5, "Aula05", "JS"),
    (6, "Aula06", "Prática JS"),
    (7, "Aula07", "Prova 1"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({
    "id": 1,
    "title": "Aula de exemplo",
    "content": "Conteúdo da aula de exemplo"
}))]
pub struct Lesson {
    /// ID da aula
    id: i64,
    /// Título da aula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Conteúdo da aula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> ResourceType {
        ResourceType::Lesson
    }
}

impl Lesson {
    pub fn new(id: i64, title: Option<String>, content: Option<String>) -> Self {
        Self { id, title, content }
    }

    pub fn from_create(id: i64, data: LessonCreate) -> Self {
        Self::new(id, data.title, data.content)
    }

    pub fn seed() -> Vec<Self> {
        SEED.iter()
            .map(|(id, title, content)| {
                Self::new(*id, Some(title.to_string()), Some(content.to_string()))
            })
            .collect()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Fields are stored verbatim; a missing field stays absent on the lesson.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LessonCreate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl LessonCreate {
    pub fn new<S: Into<String>>(title: S, content: S) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LessonUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl LessonUpdate {
    /// Overwrites a field only when the incoming value is present and
    /// non-empty, so `""` never clears anything. The id is left untouched.
    pub fn apply(self, lesson: &mut Lesson) {
        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            lesson.title = Some(title);
        }
        if let Some(content) = self.content.filter(|c| !c.is_empty()) {
            lesson.content = Some(content);
        }
    }
}

#[async_trait]
impl CrudRepository<Lesson, LessonCreate, LessonUpdate, i64> for Lesson {
    async fn create(mm: &ModelManager, data: LessonCreate) -> Self {
        mm.store().create(data).await
    }

    async fn update_by_id(mm: &ModelManager, id: i64, data: LessonUpdate) -> ModelResult<Self> {
        mm.store().update_by_id(id, data).await
    }

    async fn delete_by_id(mm: &ModelManager, id: i64) -> ModelResult<()> {
        mm.store().delete_by_id(id).await
    }

    async fn find_by_id(mm: &ModelManager, id: i64) -> ModelResult<Self> {
        mm.store().get_by_id(id).await
    }

    async fn list(mm: &ModelManager) -> Vec<Self> {
        mm.store().list().await
    }
}
