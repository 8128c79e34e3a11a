use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::shipments::domain::entities::{NewShipment, Shipment, ShipmentStatus};
use crate::modules::shipments::domain::repository::{ShipmentQuery, ShipmentRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Ack, ApiClient};

pub struct ShipmentRepositoryImpl {
    api: Arc<ApiClient>,
}

impl ShipmentRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ShipmentRepository for ShipmentRepositoryImpl {
    async fn list(&self, query: &ShipmentQuery) -> AppResult<Vec<Shipment>> {
        let driver_id = query.driver_id.map(|id| id.to_string());
        let path = match driver_id.as_deref() {
            Some(driver_id) => ApiClient::with_query("/shipments", &[("driver_id", driver_id)]),
            None => "/shipments".to_string(),
        };
        self.api.get_json(&path).await
    }

    async fn create(&self, shipment: &NewShipment) -> AppResult<Shipment> {
        self.api.post_json("/shipments", shipment).await
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ShipmentStatus,
        reason: Option<String>,
    ) -> AppResult<()> {
        let body = match reason {
            Some(reason) => json!({ "status": status.to_string(), "reason": reason }),
            None => json!({ "status": status.to_string() }),
        };
        let _: Ack = self
            .api
            .put_json(&format!("/shipments/{}/status", id), &body)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.api.delete(&format!("/shipments/{}", id)).await.map(|_| ())
    }
}
