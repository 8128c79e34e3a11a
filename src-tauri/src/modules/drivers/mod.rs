/// Driver module
///
/// Continuous geolocation reporting while a driver has shipments on the
/// road: the webview pushes fixes in, the tracker throttles and uploads
/// them, and the watch only ends on logout or teardown.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::tracker::LocationTracker;
pub use domain::entities::LocationFix;
pub use domain::repository::DriverLocationRepository;
pub use infrastructure::api::DriverLocationRepositoryImpl;
