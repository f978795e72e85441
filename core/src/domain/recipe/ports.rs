use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{AskRecipeInput, RecipeOutcome},
};

/// Client trait for the text-completion endpoint (LLM). One prompt in, plain
/// text out. No retries, no streaming.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    fn complete(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the recipe pipeline
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn ask(
        &self,
        input: AskRecipeInput,
    ) -> impl Future<Output = Result<RecipeOutcome, CoreError>> + Send;
}
