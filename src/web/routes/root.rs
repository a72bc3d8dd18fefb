use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::web::dto::lessons::MessageResponse;

pub static GREETING: &str = "Olá, você está no servidor do professor Lucas =D";

pub fn routes<S: Send + Sync + Clone + 'static>() -> Router<S> {
    Router::new().route("/", get(root_handler))
}

#[utoipa::path(
    get,
    path = "/",
    description = "Greeting, useful to check the server is up",
    responses(
        (status = 200, description = "Server is up", body = MessageResponse),
    ),
    tag = "root"
)]
async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: String::from(GREETING),
        }),
    )
}
