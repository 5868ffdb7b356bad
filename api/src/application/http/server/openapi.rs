use crate::application::http::{
    catalog::router::CatalogApiDoc, chat::router::ChatApiDoc, profile::router::ProfileApiDoc,
    recommendation::router::RecommendationApiDoc, scan::router::ScanApiDoc,
    workout::router::WorkoutApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriSense API"
    ),
    nest(
        (path = "/sessions/{session_id}", api = ProfileApiDoc),
        (path = "/sessions/{session_id}", api = RecommendationApiDoc),
        (path = "/sessions/{session_id}", api = ScanApiDoc),
        (path = "/sessions/{session_id}", api = WorkoutApiDoc),
        (path = "/sessions/{session_id}", api = ChatApiDoc),
        (path = "/catalog", api = CatalogApiDoc),
    )
)]
pub struct ApiDoc;
