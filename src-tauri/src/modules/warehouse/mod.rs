/// Warehouse module
///
/// Material requests raised from the machines, pallet registration via QR
/// scans, and the warehouse-scoped pallet pool that shipments draw from.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::WarehouseService;
pub use domain::entities::{Pallet, PalletScan, WarehouseRequest, WarehouseRequestStatus};
pub use domain::repository::WarehouseRepository;
pub use infrastructure::api::WarehouseRepositoryImpl;
