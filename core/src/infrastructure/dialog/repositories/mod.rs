pub mod dialog_repository;
