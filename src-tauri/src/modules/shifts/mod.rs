/// Shift lifecycle module
///
/// Factory-wide shift start/end with the two end strategies (notify the
/// operators for reports, or management fills them directly) and the
/// report approval flow. Ending a shift never completes a job.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::{EndShiftOutcome, ShiftService};
pub use domain::entities::{ReportDraft, ReportStatus, Shift, ShiftReport, ShiftStatus};
pub use domain::repository::ShiftRepository;
pub use infrastructure::api::ShiftRepositoryImpl;
