use super::handlers::ask_question::{__path_ask_question, ask_question};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(ask_question))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/ask", state.args.server.root_path),
        post(ask_question),
    )
}
