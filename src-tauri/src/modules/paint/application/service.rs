use std::sync::Arc;
use uuid::Uuid;

use crate::modules::paint::domain::entities::{
    MovementRequest, PaintColor, PaintMovement,
};
use crate::modules::paint::domain::repository::PaintRepository;
use crate::shared::application::speculate;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::EntityStore;
use crate::shared::utils::Validator;
use crate::log_info;

pub struct PaintService {
    repo: Arc<dyn PaintRepository>,
    colors: Arc<EntityStore<PaintColor>>,
}

impl PaintService {
    pub fn new(repo: Arc<dyn PaintRepository>) -> Self {
        Self {
            repo,
            colors: Arc::new(EntityStore::new()),
        }
    }

    pub async fn refresh(&self) -> AppResult<()> {
        let token = self.colors.begin_fetch();
        let colors = self.repo.list_colors().await?;
        self.colors.apply_snapshot(token, colors);
        Ok(())
    }

    pub fn colors(&self) -> Vec<PaintColor> {
        let mut colors = self.colors.all();
        colors.sort_by(|a, b| a.name.cmp(&b.name));
        colors
    }

    pub async fn create_color(&self, name: &str) -> AppResult<PaintColor> {
        Validator::validate_required_text("Color name", name)?;
        if self
            .colors
            .all()
            .iter()
            .any(|color| color.name.eq_ignore_ascii_case(name.trim()))
        {
            return Err(AppError::Validation(format!(
                "Color '{}' already exists",
                name.trim()
            )));
        }

        let created = self.repo.create_color(name.trim()).await?;
        self.colors.upsert(created.clone());
        Ok(created)
    }

    pub async fn movements(&self, color_id: Uuid) -> AppResult<Vec<PaintMovement>> {
        self.repo.movements(color_id).await
    }

    /// Validate and record one stock movement; the predicted stock level is
    /// applied speculatively and rolled back if the backend refuses.
    pub async fn record_movement(
        &self,
        color_id: Uuid,
        request: MovementRequest,
    ) -> AppResult<PaintMovement> {
        let color = self
            .colors
            .get(color_id)
            .ok_or_else(|| AppError::NotFound(format!("Color {} is unknown", color_id)))?;

        let submission = request.submission(&color)?;

        let mut predicted = color.clone();
        predicted.stock_kg = request.predicted_stock(color.stock_kg);

        let movement = speculate(
            &self.colors,
            predicted,
            self.repo.record_movement(color_id, &submission),
        )
        .await?;

        log_info!(
            "Paint movement on '{}': {} ({:.2} kg)",
            color.name,
            movement.kind,
            movement.amount_kg
        );
        Ok(movement)
    }
}
