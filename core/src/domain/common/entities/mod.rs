pub mod app_errors;

pub use app_errors::CoreError;
