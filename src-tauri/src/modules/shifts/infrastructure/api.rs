use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::shifts::domain::entities::{Shift, ShiftReport};
use crate::modules::shifts::domain::repository::{ReportSubmission, ShiftRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Ack, ApiClient};

pub struct ShiftRepositoryImpl {
    api: Arc<ApiClient>,
}

impl ShiftRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ShiftRepository for ShiftRepositoryImpl {
    async fn current_shift(&self) -> AppResult<Option<Shift>> {
        self.api.get_json("/shifts/current").await
    }

    async fn start_shift(&self) -> AppResult<Shift> {
        self.api.post_empty("/shifts/start").await
    }

    async fn end_shift(&self) -> AppResult<()> {
        let _: Ack = self.api.post_empty("/shifts/end").await?;
        Ok(())
    }

    async fn request_end(&self) -> AppResult<()> {
        let _: Ack = self.api.post_empty("/shifts/request-end").await?;
        Ok(())
    }

    async fn end_with_reports(&self, reports: &[ReportSubmission]) -> AppResult<()> {
        let _: Ack = self
            .api
            .post_json("/shifts/end-with-report", &json!({ "reports": reports }))
            .await?;
        Ok(())
    }

    async fn submit_report(&self, report: &ReportSubmission) -> AppResult<ShiftReport> {
        self.api.post_json("/shifts/operator-report", report).await
    }

    async fn approve_report(&self, report_id: Uuid) -> AppResult<()> {
        let _: Ack = self
            .api
            .post_empty(&format!("/shifts/approve-report/{}", report_id))
            .await?;
        Ok(())
    }

    async fn approve_all(&self) -> AppResult<()> {
        let _: Ack = self.api.post_empty("/shifts/approve-all").await?;
        Ok(())
    }
}
