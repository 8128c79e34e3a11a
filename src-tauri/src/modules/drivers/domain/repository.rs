/// Backend boundary for driver location reporting.
use async_trait::async_trait;
use uuid::Uuid;

use super::entities::LocationFix;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait DriverLocationRepository: Send + Sync {
    async fn update_location(&self, driver_id: Uuid, fix: &LocationFix) -> AppResult<()>;
}
