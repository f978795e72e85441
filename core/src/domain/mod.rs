pub mod common;
pub mod dialog;
pub mod health;
pub mod recipe;
pub mod stats;
