use super::handlers::get_dialogs::{__path_get_dialogs, get_dialogs};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_dialogs))]
pub struct DialogApiDoc;

pub fn dialog_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/dialogs", state.args.server.root_path),
        get(get_dialogs),
    )
}
