use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::jobs::domain::entities::{
    CloneOverrides, Job, JobQuery, JobUpdate, Machine, MaintenanceLog, NewJob,
};
use crate::modules::jobs::domain::reorder::OrderAssignment;
use crate::modules::jobs::domain::repository::JobRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Ack, ApiClient};

pub struct JobRepositoryImpl {
    api: Arc<ApiClient>,
}

impl JobRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryImpl {
    async fn list_jobs(&self, query: &JobQuery) -> AppResult<Vec<Job>> {
        let status = query.status.map(|s| s.to_string());
        let machine_id = query.machine_id.map(|id| id.to_string());

        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(status) = status.as_deref() {
            pairs.push(("status", status));
        }
        if let Some(machine_id) = machine_id.as_deref() {
            pairs.push(("machine_id", machine_id));
        }

        self.api.get_json(&ApiClient::with_query("/jobs", &pairs)).await
    }

    async fn create_job(&self, job: &NewJob) -> AppResult<Job> {
        self.api.post_json("/jobs", job).await
    }

    async fn update_job(&self, id: Uuid, update: &JobUpdate) -> AppResult<Job> {
        self.api.put_json(&format!("/jobs/{}", id), update).await
    }

    async fn delete_job(&self, id: Uuid) -> AppResult<()> {
        self.api.delete(&format!("/jobs/{}", id)).await.map(|_| ())
    }

    async fn start_job(&self, id: Uuid, operator_name: &str) -> AppResult<()> {
        let _: Ack = self
            .api
            .post_json(
                &format!("/jobs/{}/start", id),
                &json!({ "operator_name": operator_name }),
            )
            .await?;
        Ok(())
    }

    async fn pause_job(&self, id: Uuid, reason: &str, produced_so_far: i32) -> AppResult<()> {
        let _: Ack = self
            .api
            .post_json(
                &format!("/jobs/{}/pause", id),
                &json!({ "reason": reason, "produced_so_far": produced_so_far }),
            )
            .await?;
        Ok(())
    }

    async fn resume_job(&self, id: Uuid) -> AppResult<()> {
        let _: Ack = self.api.post_empty(&format!("/jobs/{}/resume", id)).await?;
        Ok(())
    }

    async fn complete_job(&self, id: Uuid) -> AppResult<()> {
        let _: Ack = self.api.post_empty(&format!("/jobs/{}/complete", id)).await?;
        Ok(())
    }

    async fn clone_job(&self, id: Uuid, overrides: &CloneOverrides) -> AppResult<Job> {
        self.api.post_json(&format!("/jobs/{}/clone", id), overrides).await
    }

    async fn reorder_jobs(&self, batch: &[OrderAssignment]) -> AppResult<()> {
        let _: Ack = self
            .api
            .put_json("/jobs/reorder-batch", &json!({ "orders": batch }))
            .await?;
        Ok(())
    }

    async fn list_machines(&self) -> AppResult<Vec<Machine>> {
        self.api.get_json("/machines").await
    }

    async fn set_maintenance(
        &self,
        machine_id: Uuid,
        maintenance: bool,
        reason: Option<String>,
    ) -> AppResult<()> {
        let _: Ack = self
            .api
            .put_json(
                &format!("/machines/{}/maintenance", machine_id),
                &json!({ "maintenance": maintenance, "reason": reason.unwrap_or_default() }),
            )
            .await?;
        Ok(())
    }

    async fn maintenance_logs(&self) -> AppResult<Vec<MaintenanceLog>> {
        self.api.get_json("/maintenance-logs").await
    }
}
