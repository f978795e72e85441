use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dialog::{entities::Dialog, ports::DialogRepository},
    health::ports::HealthCheckRepository,
    recipe::{
        entities::{RecipeState, RouteDecision},
        ports::{CompletionClient, RecipeService},
        value_objects::{AskRecipeInput, RecipeOutcome},
    },
    stats::ports::DialogStatsRepository,
};

/// Ceiling on pipeline transitions. The graph as defined never exceeds five;
/// this only bounds runaway execution.
const MAX_TRANSITIONS: usize = 10;

/// Keywords (lower-case) whose presence in the cuisine marks it as Japanese.
const JAPANESE_CUISINE_KEYWORDS: [&str; 4] = ["япон", "japan", "sushi", "суши"];

/// Fixed promotional suffix appended for Japanese cuisine.
const SUSHI_AD_MESSAGE: &str =
    "\n\n🍣 Хотите настоящие суши? Закажите в 'Ninja Sushi' со скидкой 20% (промокод SUSHI20)!";

/// Nodes of the pipeline graph. Single entry (`ClassifyCuisine`), single
/// terminal (`Done`), no cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PipelineStep {
    ClassifyCuisine,
    GenerateRecipe,
    AddAdMessage,
    SaveToDb,
    Done,
}

/// Lower-cases the cuisine and checks for any Japanese keyword. Pure routing
/// decision, no side effects.
pub fn route_based_on_cuisine(cuisine: &str) -> RouteDecision {
    let cuisine = cuisine.to_lowercase();
    if JAPANESE_CUISINE_KEYWORDS
        .iter()
        .any(|word| cuisine.contains(word))
    {
        RouteDecision::AddAd
    } else {
        RouteDecision::Save
    }
}

/// Appends the fixed sushi promotion to the answer.
fn add_ad_message(state: RecipeState) -> RecipeState {
    RecipeState {
        answer: format!("{}{}", state.answer, SUSHI_AD_MESSAGE),
        ..state
    }
}

fn remove_ascii_case_insensitive(haystack: &str, needle: &str) -> String {
    let hay = haystack.as_bytes();
    let ned = needle.as_bytes();
    let mut out = Vec::with_capacity(hay.len());
    let mut i = 0;
    while i < hay.len() {
        if hay[i..].len() >= ned.len() && hay[i..i + ned.len()].eq_ignore_ascii_case(ned) {
            i += ned.len();
        } else {
            out.push(hay[i]);
            i += 1;
        }
    }
    // Removed needles are pure ASCII, so the buffer stays valid UTF-8.
    String::from_utf8(out).unwrap_or_else(|_| haystack.to_string())
}

/// Strips markdown code-fence markers ("```json" and "```",
/// case-insensitive) that models sometimes wrap their JSON in.
pub fn strip_code_fences(raw: &str) -> String {
    let without_json = remove_ascii_case_insensitive(raw, "```json");
    remove_ascii_case_insensitive(&without_json, "```")
        .trim()
        .to_string()
}

/// Extracts the `answer` field from a JSON object response. Falls back to
/// the cleaned raw text when the response is not valid JSON or the field is
/// missing; this is the recovery path for a model that ignored the JSON
/// instruction and must never fail.
pub fn extract_answer(clean_content: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(clean_content) {
        Ok(data) => data
            .get("answer")
            .and_then(|answer| answer.as_str())
            .map(|answer| answer.to_string())
            .unwrap_or_else(|| clean_content.to_string()),
        Err(_) => clean_content.to_string(),
    }
}

impl<D, L, S, H> Service<D, L, S, H>
where
    D: DialogRepository,
    L: CompletionClient,
    S: DialogStatsRepository,
    H: HealthCheckRepository,
{
    /// Step 1: ask the model to name the cuisine of the dish. The trimmed
    /// response is taken as-is, without validation.
    async fn classify_cuisine(&self, state: RecipeState) -> Result<RecipeState, CoreError> {
        let prompt = format!(
            "Определи кухню для блюда: {}. Верни только название кухни (одним-двумя словами).",
            state.question
        );

        let cuisine = self.llm_client.complete(prompt).await?;

        Ok(RecipeState {
            cuisine: cuisine.trim().to_string(),
            ..state
        })
    }

    /// Step 2: ask the model for a recipe as `{"answer": "..."}` and extract
    /// the field, falling back to the raw text on malformed JSON.
    async fn generate_recipe(&self, state: RecipeState) -> Result<RecipeState, CoreError> {
        let prompt = format!(
            "Дай подробный рецепт блюда {} для кухни {}. \
             Верни ответ строго в формате JSON: {{\"answer\": \"текст рецепта\"}}",
            state.question, state.cuisine
        );

        let content = self.llm_client.complete(prompt).await?;

        let clean_content = strip_code_fences(&content);
        let answer = extract_answer(&clean_content);

        Ok(RecipeState { answer, ..state })
    }

    /// Terminal step: best-effort persistence. A storage error is logged and
    /// swallowed; the user-facing answer must not be lost because the write
    /// failed.
    async fn save_to_db(&self, state: &RecipeState) {
        let dialog = Dialog::new(
            state.question.clone(),
            state.answer.clone(),
            state.cuisine.clone(),
        );

        if let Err(e) = self.dialog_repository.append(dialog).await {
            tracing::error!("Failed to save dialog: {}", e);
        }
    }
}

impl<D, L, S, H> RecipeService for Service<D, L, S, H>
where
    D: DialogRepository,
    L: CompletionClient,
    S: DialogStatsRepository,
    H: HealthCheckRepository,
{
    async fn ask(&self, input: AskRecipeInput) -> Result<RecipeOutcome, CoreError> {
        let mut state = RecipeState::new(input.question);
        let mut step = PipelineStep::ClassifyCuisine;
        let mut transitions = 0;

        while step != PipelineStep::Done {
            transitions += 1;
            if transitions > MAX_TRANSITIONS {
                return Err(CoreError::PipelineLimitExceeded(MAX_TRANSITIONS));
            }

            step = match step {
                PipelineStep::ClassifyCuisine => {
                    state = self.classify_cuisine(state).await?;
                    PipelineStep::GenerateRecipe
                }
                PipelineStep::GenerateRecipe => {
                    state = self.generate_recipe(state).await?;
                    match route_based_on_cuisine(&state.cuisine) {
                        RouteDecision::AddAd => PipelineStep::AddAdMessage,
                        RouteDecision::Save => PipelineStep::SaveToDb,
                    }
                }
                PipelineStep::AddAdMessage => {
                    state = add_ad_message(state);
                    PipelineStep::SaveToDb
                }
                PipelineStep::SaveToDb => {
                    self.save_to_db(&state).await;
                    PipelineStep::Done
                }
                PipelineStep::Done => PipelineStep::Done,
            };
        }

        Ok(RecipeOutcome {
            cuisine: state.cuisine,
            answer: state.answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        dialog::ports::MockDialogRepository, health::ports::MockHealthCheckRepository,
        recipe::ports::MockCompletionClient, stats::ports::MockDialogStatsRepository,
    };

    fn completion_client(cuisine: &str, recipe: &str) -> MockCompletionClient {
        let cuisine = cuisine.to_string();
        let recipe = recipe.to_string();
        let mut llm = MockCompletionClient::new();
        llm.expect_complete().times(2).returning(move |prompt| {
            let response = if prompt.starts_with("Определи кухню") {
                cuisine.clone()
            } else {
                recipe.clone()
            };
            Box::pin(ready(Ok(response)))
        });
        llm
    }

    fn accepting_repository() -> MockDialogRepository {
        let mut repository = MockDialogRepository::new();
        repository
            .expect_append()
            .times(1)
            .returning(|dialog| Box::pin(ready(Ok(dialog))));
        repository
    }

    fn service(
        repository: MockDialogRepository,
        llm: MockCompletionClient,
    ) -> Service<
        MockDialogRepository,
        MockCompletionClient,
        MockDialogStatsRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            repository,
            llm,
            MockDialogStatsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn sushi_question_gets_recipe_with_ad_suffix() {
        let llm = completion_client("Japanese", r#"{"answer": "Rice, nori, fish."}"#);
        let service = service(accepting_repository(), llm);

        let outcome = service
            .ask(AskRecipeInput {
                question: "sushi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.cuisine, "Japanese");
        assert_eq!(
            outcome.answer,
            format!("Rice, nori, fish.{}", SUSHI_AD_MESSAGE)
        );
    }

    #[tokio::test]
    async fn non_japanese_cuisine_keeps_answer_unmodified() {
        let llm = completion_client("Italian", r#"{"answer": "Boil the pasta."}"#);
        let service = service(accepting_repository(), llm);

        let outcome = service
            .ask(AskRecipeInput {
                question: "carbonara".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.cuisine, "Italian");
        assert_eq!(outcome.answer, "Boil the pasta.");
    }

    #[tokio::test]
    async fn classification_response_is_trimmed() {
        let llm = completion_client("  Italian \n", r#"{"answer": "Boil the pasta."}"#);
        let service = service(accepting_repository(), llm);

        let outcome = service
            .ask(AskRecipeInput {
                question: "carbonara".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.cuisine, "Italian");
    }

    #[tokio::test]
    async fn fenced_json_response_is_unwrapped() {
        let llm = completion_client("Italian", "```json\n{\"answer\": \"X\"}\n```");
        let service = service(accepting_repository(), llm);

        let outcome = service
            .ask(AskRecipeInput {
                question: "pizza".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.answer, "X");
    }

    #[tokio::test]
    async fn invalid_json_falls_back_to_raw_text() {
        let llm = completion_client("Italian", "Just eat out.");
        let service = service(accepting_repository(), llm);

        let outcome = service
            .ask(AskRecipeInput {
                question: "pizza".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.answer, "Just eat out.");
    }

    #[tokio::test]
    async fn persistence_failure_is_swallowed() {
        let mut repository = MockDialogRepository::new();
        repository
            .expect_append()
            .times(1)
            .returning(|_| Box::pin(ready(Err(CoreError::InternalServerError))));

        let llm = completion_client("Italian", r#"{"answer": "Boil the pasta."}"#);
        let service = service(repository, llm);

        let outcome = service
            .ask(AskRecipeInput {
                question: "carbonara".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.cuisine, "Italian");
        assert_eq!(outcome.answer, "Boil the pasta.");
    }

    #[tokio::test]
    async fn completion_failure_fails_the_request() {
        let mut llm = MockCompletionClient::new();
        llm.expect_complete().times(1).returning(|_| {
            Box::pin(ready(Err(CoreError::ExternalServiceError(
                "boom".to_string(),
            ))))
        });

        let mut repository = MockDialogRepository::new();
        repository.expect_append().never();

        let service = service(repository, llm);

        let result = service
            .ask(AskRecipeInput {
                question: "sushi".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn saved_dialog_carries_final_state() {
        let mut repository = MockDialogRepository::new();
        repository
            .expect_append()
            .times(1)
            .withf(|dialog| {
                dialog.question == "sushi"
                    && dialog.cuisine == "Japanese"
                    && dialog.answer.ends_with(SUSHI_AD_MESSAGE)
            })
            .returning(|dialog| Box::pin(ready(Ok(dialog))));

        let llm = completion_client("Japanese", r#"{"answer": "Rice, nori, fish."}"#);
        let service = service(repository, llm);

        service
            .ask(AskRecipeInput {
                question: "sushi".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn longest_path_stays_within_transition_ceiling() {
        // The ad path is the longest walk through the graph; it must
        // complete well under MAX_TRANSITIONS rather than trip the guard.
        let llm = completion_client("Японская", r#"{"answer": "Рис, нори, рыба."}"#);
        let service = service(accepting_repository(), llm);

        let result = service
            .ask(AskRecipeInput {
                question: "суши".to_string(),
            })
            .await;

        assert!(!matches!(
            result,
            Err(CoreError::PipelineLimitExceeded(_))
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn routing_detects_japanese_keywords_case_insensitively() {
        for cuisine in ["Japanese", "JAPANESE", "Японская", "sushi bar", "Суши"] {
            assert_eq!(route_based_on_cuisine(cuisine), RouteDecision::AddAd);
        }

        for cuisine in ["Italian", "французская", "", "Mexican"] {
            assert_eq!(route_based_on_cuisine(cuisine), RouteDecision::Save);
        }
    }

    #[test]
    fn fence_stripping_is_idempotent_with_plain_json() {
        let fenced = "```json\n{\"answer\": \"X\"}\n```";
        let plain = "{\"answer\": \"X\"}";

        assert_eq!(strip_code_fences(fenced), plain);
        assert_eq!(strip_code_fences(plain), plain);
        assert_eq!(
            extract_answer(&strip_code_fences(fenced)),
            extract_answer(&strip_code_fences(plain))
        );
    }

    #[test]
    fn fence_stripping_handles_uppercase_marker() {
        assert_eq!(
            strip_code_fences("```JSON\n{\"answer\": \"X\"}\n```"),
            "{\"answer\": \"X\"}"
        );
    }

    #[test]
    fn missing_answer_field_falls_back_to_cleaned_text() {
        let clean = r#"{"recipe": "Boil the pasta."}"#;
        assert_eq!(extract_answer(clean), clean);
    }
}
