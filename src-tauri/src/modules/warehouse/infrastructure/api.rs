use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::warehouse::domain::entities::{
    NewPalletScan, NewWarehouseRequest, Pallet, PalletScan, WarehouseRequest, WarehouseRequestStatus,
};
use crate::modules::warehouse::domain::repository::WarehouseRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Ack, ApiClient};

pub struct WarehouseRepositoryImpl {
    api: Arc<ApiClient>,
}

impl WarehouseRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WarehouseRepository for WarehouseRepositoryImpl {
    async fn list_requests(
        &self,
        status: Option<WarehouseRequestStatus>,
    ) -> AppResult<Vec<WarehouseRequest>> {
        let path = match status {
            Some(WarehouseRequestStatus::Pending) => {
                ApiClient::with_query("/warehouse-requests", &[("status", "pending")])
            }
            Some(WarehouseRequestStatus::Completed) => {
                ApiClient::with_query("/warehouse-requests", &[("status", "completed")])
            }
            None => "/warehouse-requests".to_string(),
        };
        self.api.get_json(&path).await
    }

    async fn create_request(&self, request: &NewWarehouseRequest) -> AppResult<WarehouseRequest> {
        self.api.post_json("/warehouse-requests", request).await
    }

    async fn complete_request(&self, id: Uuid) -> AppResult<()> {
        let _: Ack = self
            .api
            .put_empty(&format!("/warehouse-requests/{}/complete", id))
            .await?;
        Ok(())
    }

    async fn list_pallet_scans(&self) -> AppResult<Vec<PalletScan>> {
        self.api.get_json("/pallets").await
    }

    async fn scan_pallet(&self, scan: &NewPalletScan) -> AppResult<PalletScan> {
        self.api.post_json("/pallets", scan).await
    }

    async fn available_pallets(&self, warehouse: Option<String>) -> AppResult<Vec<Pallet>> {
        let path = match warehouse.as_deref() {
            Some(scope) => ApiClient::with_query("/pallets/available", &[("warehouse", scope)]),
            None => "/pallets/available".to_string(),
        };
        self.api.get_json(&path).await
    }
}
