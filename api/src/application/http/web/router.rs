use super::handlers::index::index;
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};

pub fn web_routes(state: AppState) -> Router<AppState> {
    Router::new().route(&format!("{}/", state.args.server.root_path), get(index))
}
