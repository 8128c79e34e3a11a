/// Realtime notifier module
///
/// WebSocket channel for unsolicited backend events (`new_warehouse_request`,
/// `shift_end_request`, `new_message`). Events trigger targeted refetches,
/// never direct state merges. Reconnects with capped exponential backoff
/// plus jitter; teardown is explicit. Also registers push tokens after
/// login (the push infrastructure is an external collaborator).
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::notifier::RealtimeNotifier;
pub use domain::events::{ConnectionStatus, EventSink, RealtimeEvent};
pub use domain::reconnect::ReconnectPolicy;
pub use domain::repository::NotificationRepository;
pub use infrastructure::api::NotificationRepositoryImpl;
