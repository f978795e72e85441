pub mod repositories;

pub use repositories::stats_repository::PostgresDialogStatsRepository;
