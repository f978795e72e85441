pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{RecipeState, RouteDecision};
pub use ports::{CompletionClient, RecipeService};
