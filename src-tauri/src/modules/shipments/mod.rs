/// Shipment module
///
/// Shipments composed from warehouse pallets, assigned to a vehicle and
/// driver, and tracked through `preparing → in_transit → delivered/failed`.
/// Pallets on a shipment stay out of the pool; only deleting a preparing
/// shipment returns them.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::ShipmentService;
pub use domain::entities::{NewShipment, PalletRef, Shipment, ShipmentStatus};
pub use domain::repository::{ShipmentQuery, ShipmentRepository};
pub use infrastructure::api::ShipmentRepositoryImpl;
