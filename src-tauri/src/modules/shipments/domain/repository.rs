/// Backend boundary for shipments.
use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{NewShipment, Shipment, ShipmentStatus};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Default)]
pub struct ShipmentQuery {
    pub driver_id: Option<Uuid>,
}

#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn list(&self, query: &ShipmentQuery) -> AppResult<Vec<Shipment>>;

    async fn create(&self, shipment: &NewShipment) -> AppResult<Shipment>;

    /// Status transition; `reason` is mandatory for `failed`.
    async fn set_status(
        &self,
        id: Uuid,
        status: ShipmentStatus,
        reason: Option<String>,
    ) -> AppResult<()>;

    /// Allowed only while the shipment is still `preparing`.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
