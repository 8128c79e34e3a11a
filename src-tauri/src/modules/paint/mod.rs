/// Paint stock module
///
/// Named colors with kilogram stock levels and an immutable movement log
/// (`add`, `remove`, `to_machine`, `from_machine`). The stock floor is
/// server-enforced; the client blocks clearly invalid submissions.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::PaintService;
pub use domain::entities::{MovementKind, MovementRequest, PaintColor, PaintMovement};
pub use domain::repository::PaintRepository;
pub use infrastructure::api::PaintRepositoryImpl;
