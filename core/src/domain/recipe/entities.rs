use serde::{Deserialize, Serialize};

/// State threaded through the pipeline. Each step returns a fully-replaced
/// copy with only its own fields updated; no step touches fields it does not
/// own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeState {
    pub question: String,
    pub cuisine: String,
    pub answer: String,
}

impl RecipeState {
    pub fn new(question: String) -> Self {
        Self {
            question,
            cuisine: String::new(),
            answer: String::new(),
        }
    }
}

/// Outcome of the routing decision after recipe generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    AddAd,
    Save,
}
