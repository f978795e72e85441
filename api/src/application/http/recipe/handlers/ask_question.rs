use axum::extract::State;

use crate::application::http::{
    recipe::validators::AskQuestionRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use serde::{Deserialize, Serialize};
use umami_core::domain::recipe::{ports::RecipeService, value_objects::AskRecipeInput};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AskQuestionResponse {
    pub answer: String,
    pub cuisine: String,
}

#[utoipa::path(
    post,
    path = "/ask",
    tag = "recipe",
    summary = "Ask for a recipe",
    description = "Classifies the cuisine of a dish and generates a recipe for it",
    responses(
        (status = 200, body = AskQuestionResponse)
    ),
    request_body = AskQuestionRequest
)]
pub async fn ask_question(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AskQuestionRequest>,
) -> Result<Response<AskQuestionResponse>, ApiError> {
    let outcome = state
        .service
        .ask(AskRecipeInput {
            question: payload.question,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AskQuestionResponse {
        answer: outcome.answer,
        cuisine: outcome.cuisine,
    }))
}
