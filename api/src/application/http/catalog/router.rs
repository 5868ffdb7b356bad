use super::handlers::{
    get_dietary_options::{__path_get_dietary_options, get_dietary_options},
    get_tip::{__path_get_tip, get_tip},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_tip, get_dietary_options))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/catalog/tips", state.args.server.root_path),
            get(get_tip),
        )
        .route(
            &format!("{}/catalog/dietary-options", state.args.server.root_path),
            get(get_dietary_options),
        )
}
