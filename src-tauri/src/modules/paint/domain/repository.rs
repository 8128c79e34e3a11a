/// Backend boundary for paint stock.
use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{MovementSubmission, PaintColor, PaintMovement};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait PaintRepository: Send + Sync {
    async fn list_colors(&self) -> AppResult<Vec<PaintColor>>;

    async fn create_color(&self, name: &str) -> AppResult<PaintColor>;

    /// Movement log for one color, newest first.
    async fn movements(&self, color_id: Uuid) -> AppResult<Vec<PaintMovement>>;

    /// Append one movement to the immutable log.
    async fn record_movement(
        &self,
        color_id: Uuid,
        movement: &MovementSubmission,
    ) -> AppResult<PaintMovement>;
}
