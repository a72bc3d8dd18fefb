//! In-memory lesson store.
//!
//! Holds the ordered sequence of lessons behind a single `tokio::sync::RwLock`.
//! Every operation takes the lock exactly once, so each one is atomic with
//! respect to the others even on a multi-threaded runtime.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::model::entity::{Lesson, LessonCreate, LessonUpdate};
use crate::model::{ModelError, ModelResult, ResourceType};

/// How `create` picks the id of a new lesson.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `id = len + 1`. After a deletion the new id can collide with an
    /// existing one (delete 3 out of 1..=7, then create: id 7 again).
    #[default]
    LengthPlusOne,
    /// `id = highest id ever issued + 1`. Ids are never reused.
    Monotonic,
}

#[derive(Debug)]
struct StoreState {
    lessons: Vec<Lesson>,
    last_id: i64,
}

impl StoreState {
    fn next_id(&self, policy: IdPolicy) -> i64 {
        match policy {
            IdPolicy::LengthPlusOne => self.lessons.len() as i64 + 1,
            IdPolicy::Monotonic => self.last_id + 1,
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.lessons.iter().position(|l| l.id() == id)
    }
}

#[derive(Debug, Clone)]
pub struct LessonStore {
    inner: Arc<RwLock<StoreState>>,
    policy: IdPolicy,
}

impl LessonStore {
    pub fn new(policy: IdPolicy) -> Self {
        Self::with_lessons(policy, Vec::new())
    }

    /// Store initialized with the seven seed lessons.
    pub fn seeded(policy: IdPolicy) -> Self {
        Self::with_lessons(policy, Lesson::seed())
    }

    pub fn with_lessons(policy: IdPolicy, lessons: Vec<Lesson>) -> Self {
        let last_id = lessons.iter().map(Lesson::id).max().unwrap_or(0);
        Self {
            inner: Arc::new(RwLock::new(StoreState { lessons, last_id })),
            policy,
        }
    }

    /// Snapshot of all lessons in store order.
    pub async fn list(&self) -> Vec<Lesson> {
        self.inner.read().await.lessons.clone()
    }

    /// Appends a new lesson. No duplicate-id check is made.
    pub async fn create(&self, data: LessonCreate) -> Lesson {
        let mut state = self.inner.write().await;
        let id = state.next_id(self.policy);
        state.last_id = state.last_id.max(id);

        let lesson = Lesson::from_create(id, data);
        state.lessons.push(lesson.clone());
        tracing::debug!("created lesson {}", id);
        lesson
    }

    /// First lesson with the given id, in store order.
    pub async fn get_by_id(&self, id: i64) -> ModelResult<Lesson> {
        let state = self.inner.read().await;
        state
            .lessons
            .iter()
            .find(|l| l.id() == id)
            .cloned()
            .ok_or(ModelError::not_found(ResourceType::Lesson, id))
    }

    pub async fn update_by_id(&self, id: i64, data: LessonUpdate) -> ModelResult<Lesson> {
        let mut state = self.inner.write().await;
        let lesson = state
            .lessons
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(ModelError::not_found(ResourceType::Lesson, id))?;

        data.apply(lesson);
        tracing::debug!("updated lesson {}", id);
        Ok(lesson.clone())
    }

    /// Removes the first lesson with the given id, shifting the ones after it.
    pub async fn delete_by_id(&self, id: i64) -> ModelResult<()> {
        let mut state = self.inner.write().await;
        let index = state
            .position(id)
            .ok_or(ModelError::not_found(ResourceType::Lesson, id))?;

        state.lessons.remove(index);
        tracing::debug!("deleted lesson {}", id);
        Ok(())
    }
}
