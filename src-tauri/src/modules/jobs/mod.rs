/// Job board module
///
/// The client side of the job lifecycle: per-machine queues, the
/// `pending → in_progress → completed` state machine with the pause side
/// branch, drag-reorder of pending queues, cloning, and machine
/// maintenance state.
///
/// Architecture:
/// - Domain: entities, transition predicates, pure reorder computation,
///   repository trait
/// - Application: `JobService` (precondition checks + speculative board
///   updates)
/// - Infrastructure: REST-backed repository
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::JobService;
pub use domain::entities::{Job, JobStatus, Machine, MachineStatus};
pub use domain::repository::JobRepository;
pub use infrastructure::api::JobRepositoryImpl;
