use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AskRecipeInput {
    pub question: String,
}

/// What the facade hands back to the caller: the final `cuisine` and
/// `answer` of the pipeline state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeOutcome {
    pub cuisine: String,
    pub answer: String,
}
