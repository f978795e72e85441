use crate::{domain::dialog::entities::Dialog, entity::dialogs};

impl From<&dialogs::Model> for Dialog {
    fn from(model: &dialogs::Model) -> Self {
        Self {
            id: model.id,
            question: model.question.clone(),
            answer: model.answer.clone(),
            cuisine: model.cuisine.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<dialogs::Model> for Dialog {
    fn from(model: dialogs::Model) -> Self {
        Self::from(&model)
    }
}
