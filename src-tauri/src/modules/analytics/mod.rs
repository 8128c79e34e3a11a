/// Production analytics module
///
/// Weekly/monthly completed-koli aggregates for the management dashboard.
/// The spreadsheet export stays server-side; the client only requests it.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::AnalyticsService;
pub use domain::entities::{AnalyticsPeriod, ProductionStats};
pub use domain::repository::AnalyticsRepository;
pub use infrastructure::api::AnalyticsRepositoryImpl;
