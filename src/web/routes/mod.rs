use crate::{
    Config,
    web::{
        AppState,
        doc::{ApiDoc, DOCS_PATH, OPENAPI_PATH},
    },
};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod lessons;
pub mod root;

pub fn build_app<S: Send + Sync + Clone + 'static>(state: AppState, config: &Config) -> Router<S> {
    let mut router = Router::new()
        .merge(root::routes())
        .merge(lessons::routes(state));

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router.merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
