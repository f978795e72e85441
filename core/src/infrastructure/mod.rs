pub mod db;
pub mod dialog;
pub mod health;
pub mod llm;
pub mod stats;
