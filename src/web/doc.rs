use utoipa::OpenApi;

use crate::model::entity::Lesson;
use crate::web::dto::lessons::{LessonCreateBody, LessonUpdateBody, MessageResponse};
use crate::web::error::ErrorResponse;

pub static DOCS_PATH: &str = "/api-docs";
pub static OPENAPI_PATH: &str = "/api-docs.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API rest Didática",
        version = "1.0.0",
        description = "Uma API simples para testar requisições REST."
    ),
    servers(
        (url = "http://localhost:3000")
    ),
    paths(
        crate::web::routes::root::root_handler,
        crate::web::routes::lessons::lessons_list_handler,
        crate::web::routes::lessons::lessons_create_handler,
        crate::web::routes::lessons::lessons_get_handler,
        crate::web::routes::lessons::lessons_update_handler,
        crate::web::routes::lessons::lessons_delete_handler,
    ),
    components(
        schemas(Lesson, LessonCreateBody, LessonUpdateBody, ErrorResponse, MessageResponse)
    ),
    tags(
        (name = "Aulas", description = "CRUD de aulas"),
        (name = "root")
    )
)]
pub struct ApiDoc;
