use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::drivers::domain::entities::LocationFix;
use crate::modules::drivers::domain::repository::DriverLocationRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Ack, ApiClient};

pub struct DriverLocationRepositoryImpl {
    api: Arc<ApiClient>,
}

impl DriverLocationRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DriverLocationRepository for DriverLocationRepositoryImpl {
    async fn update_location(&self, driver_id: Uuid, fix: &LocationFix) -> AppResult<()> {
        let _: Ack = self
            .api
            .put_json(
                &format!("/drivers/{}/location", driver_id),
                &json!({ "lat": fix.lat, "lng": fix.lng }),
            )
            .await?;
        Ok(())
    }
}
