/// Backend boundary for warehouse requests and pallets.
use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{
    NewPalletScan, NewWarehouseRequest, Pallet, PalletScan, WarehouseRequest, WarehouseRequestStatus,
};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn list_requests(
        &self,
        status: Option<WarehouseRequestStatus>,
    ) -> AppResult<Vec<WarehouseRequest>>;

    async fn create_request(&self, request: &NewWarehouseRequest) -> AppResult<WarehouseRequest>;

    async fn complete_request(&self, id: Uuid) -> AppResult<()>;

    async fn list_pallet_scans(&self) -> AppResult<Vec<PalletScan>>;

    async fn scan_pallet(&self, scan: &NewPalletScan) -> AppResult<PalletScan>;

    /// Pallets currently available for shipment composition, optionally
    /// scoped to one warehouse.
    async fn available_pallets(&self, warehouse: Option<String>) -> AppResult<Vec<Pallet>>;
}
