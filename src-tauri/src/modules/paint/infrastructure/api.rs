use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::paint::domain::entities::{MovementSubmission, PaintColor, PaintMovement};
use crate::modules::paint::domain::repository::PaintRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::ApiClient;

pub struct PaintRepositoryImpl {
    api: Arc<ApiClient>,
}

impl PaintRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PaintRepository for PaintRepositoryImpl {
    async fn list_colors(&self) -> AppResult<Vec<PaintColor>> {
        self.api.get_json("/paint/colors").await
    }

    async fn create_color(&self, name: &str) -> AppResult<PaintColor> {
        self.api.post_json("/paint/colors", &json!({ "name": name })).await
    }

    async fn movements(&self, color_id: Uuid) -> AppResult<Vec<PaintMovement>> {
        self.api
            .get_json(&format!("/paint/colors/{}/movements", color_id))
            .await
    }

    async fn record_movement(
        &self,
        color_id: Uuid,
        movement: &MovementSubmission,
    ) -> AppResult<PaintMovement> {
        self.api
            .post_json(&format!("/paint/colors/{}/movements", color_id), movement)
            .await
    }
}
