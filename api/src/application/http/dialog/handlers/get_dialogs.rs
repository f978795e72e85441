use axum::extract::{Query, State};

use crate::application::http::{
    dialog::validators::GetDialogsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use serde::{Deserialize, Serialize};
use umami_core::domain::dialog::{
    entities::Dialog, ports::DialogService, value_objects::GetDialogHistoryFilter,
};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDialogsResponse {
    pub data: Vec<Dialog>,
}

#[utoipa::path(
    get,
    path = "/dialogs",
    tag = "dialog",
    summary = "Get dialog history",
    description = "Returns recorded question/answer exchanges, newest first",
    responses(
        (status = 200, body = GetDialogsResponse)
    ),
    params(GetDialogsParams),
)]
pub async fn get_dialogs(
    State(state): State<AppState>,
    Query(params): Query<GetDialogsParams>,
) -> Result<Response<GetDialogsResponse>, ApiError> {
    let dialogs = state
        .service
        .get_dialog_history(GetDialogHistoryFilter {
            offset: params.offset,
            limit: params.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDialogsResponse { data: dialogs }))
}
