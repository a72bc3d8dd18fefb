use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use axum::{extract::State, response::IntoResponse, Router};

use crate::model::entity::{Lesson, LessonCreate, LessonUpdate};
use crate::model::{CrudRepository, ResourceTyped};
use crate::utils::parse_int::parse_int;
use crate::web::dto::lessons::{LessonCreateBody, LessonUpdateBody};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, WebError, WebResult};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route(
            "/aulas",
            get(lessons_list_handler).post(lessons_create_handler),
        )
        .route(
            "/aulas/{id}",
            get(lessons_get_handler)
                .put(lessons_update_handler)
                .delete(lessons_delete_handler),
        )
        .with_state(state)
}

/// Path ids that don't parse as an integer can never match a lesson.
fn lesson_id(raw: &str) -> WebResult<i64> {
    parse_int(raw).ok_or_else(|| WebError::resource_not_found(Lesson::get_resource_type(), raw))
}

#[utoipa::path(
    get,
    path = "/aulas",
    summary = "Lista todas as aulas",
    responses(
        (status = 200, description = "Lista de aulas", body = Vec<Lesson>),
    ),
    tag = "Aulas"
)]
async fn lessons_list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let lessons = Lesson::list(state.mm()).await;
    (StatusCode::OK, Json(lessons))
}

#[utoipa::path(
    post,
    path = "/aulas",
    summary = "Cria uma nova aula",
    request_body = LessonCreateBody,
    responses(
        (status = 201, description = "Aula criada com sucesso", body = Lesson),
    ),
    tag = "Aulas"
)]
async fn lessons_create_handler(
    State(state): State<AppState>,
    payload: Option<Json<LessonCreateBody>>,
) -> impl IntoResponse {
    let payload = payload.map(|Json(body)| body).unwrap_or_default();
    let lesson = Lesson::create(state.mm(), LessonCreate::from(payload)).await;
    tracing::info!("lesson {} created", lesson.id());
    (StatusCode::CREATED, Json(lesson))
}

#[utoipa::path(
    get,
    path = "/aulas/{id}",
    summary = "Exibe uma aula específica pelo ID",
    params(
        ("id" = i64, Path, description = "ID da aula")
    ),
    responses(
        (status = 200, description = "Detalhes da aula", body = Lesson),
        (status = 404, description = "Aula não encontrada", body = ErrorResponse),
    ),
    tag = "Aulas"
)]
async fn lessons_get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let lesson = Lesson::find_by_id(state.mm(), lesson_id(&id)?).await?;
    Ok((StatusCode::OK, Json(lesson)))
}

#[utoipa::path(
    put,
    path = "/aulas/{id}",
    summary = "Atualiza uma aula pelo ID",
    params(
        ("id" = i64, Path, description = "ID da aula")
    ),
    request_body = LessonUpdateBody,
    responses(
        (status = 200, description = "Aula atualizada com sucesso", body = Lesson),
        (status = 404, description = "Aula não encontrada", body = ErrorResponse),
    ),
    tag = "Aulas"
)]
async fn lessons_update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<LessonUpdateBody>>,
) -> WebResult<impl IntoResponse> {
    // a request without a json body changes nothing
    let payload = payload.map(|Json(body)| body).unwrap_or_default();
    let id = lesson_id(&id)?;
    let updated = Lesson::update_by_id(state.mm(), id, LessonUpdate::from(payload)).await?;
    Ok((StatusCode::OK, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/aulas/{id}",
    summary = "Deleta uma aula pelo ID",
    params(
        ("id" = i64, Path, description = "ID da aula")
    ),
    responses(
        (status = 204, description = "Aula deletada com sucesso"),
        (status = 404, description = "Aula não encontrada", body = ErrorResponse),
    ),
    tag = "Aulas"
)]
async fn lessons_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let id = lesson_id(&id)?;
    Lesson::delete_by_id(state.mm(), id).await?;
    tracing::info!("lesson {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
