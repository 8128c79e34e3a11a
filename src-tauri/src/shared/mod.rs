// Shared kernel used by every bounded context

pub mod application; // Speculative mutation helpers
pub mod config; // Environment-driven runtime configuration
pub mod errors; // Shared error taxonomy
pub mod infrastructure; // HTTP client, stores, poll loops
pub mod utils; // Logging, validation

// Re-exports for convenience
pub use config::AppConfig;
pub use infrastructure::{Ack, ApiClient, EntityStore, HasId, Poller};
