/// Messaging module
///
/// The factory board messages; `new_message` realtime events nudge the
/// list refetch.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::MessageService;
pub use domain::entities::Message;
pub use domain::repository::MessageRepository;
pub use infrastructure::api::MessageRepositoryImpl;
