// Bounded contexts of the factory client

pub mod analytics;
pub mod auth;
pub mod drivers;
pub mod jobs;
pub mod messages;
pub mod paint;
pub mod realtime;
pub mod shifts;
pub mod shipments;
pub mod warehouse;
