/// Shared infrastructure concerns
///
/// Infrastructure implementations used across multiple bounded contexts
/// (modules): backend HTTP access, in-memory snapshot stores, poll loops.
pub mod http;
pub mod poller;
pub mod store;

// Re-exports for convenience
pub use http::{Ack, ApiClient};
pub use poller::Poller;
pub use store::{EntityStore, HasId, UpdateGate};
