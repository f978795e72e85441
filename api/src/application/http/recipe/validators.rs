use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AskQuestionRequest {
    /// The dish name is passed through as-is; an empty question is not
    /// rejected, only an oversized one.
    #[validate(length(max = 500, message = "question must be at most 500 characters"))]
    #[schema(example = "sushi")]
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_question_passes_validation() {
        let request = AskQuestionRequest {
            question: String::new(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn oversized_question_is_rejected() {
        let request = AskQuestionRequest {
            question: "x".repeat(501),
        };

        assert!(request.validate().is_err());
    }
}
