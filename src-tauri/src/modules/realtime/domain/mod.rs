pub mod events;
pub mod reconnect;
pub mod repository;
