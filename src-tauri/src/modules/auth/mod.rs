/// Session and role-gate module
///
/// Per-role login (display name for operators, username+password for
/// drivers, per-role passwords for the gated panels), JSON-blob session
/// persistence, and the explicit [`SessionContext`] handle that every
/// controller receives at construction.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::context::SessionContext;
pub use application::service::AuthService;
pub use domain::repository::AuthRepository;
pub use domain::session::{Role, Session};
pub use infrastructure::api::AuthRepositoryImpl;
pub use infrastructure::session_store::SessionStore;
