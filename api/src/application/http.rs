pub mod dialog;
pub mod health;
pub mod recipe;
pub mod server;
pub mod stats;
pub mod web;
