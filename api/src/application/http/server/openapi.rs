use utoipa::OpenApi;

use crate::application::http::{
    dialog::router::DialogApiDoc, health::HealthApiDoc, recipe::router::RecipeApiDoc,
    stats::router::StatsApiDoc,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Umami API",
    description = "AI recipe assistant: cuisine classification, recipe generation and cuisine stats"
))]
pub struct ApiDoc;

/// Aggregates the per-feature docs into one document.
pub fn build_openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(RecipeApiDoc::openapi());
    doc.merge(DialogApiDoc::openapi());
    doc.merge(StatsApiDoc::openapi());
    doc.merge(HealthApiDoc::openapi());
    doc
}
