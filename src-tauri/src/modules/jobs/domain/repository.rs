/// Backend boundary for the job board.
///
/// Implemented over the REST API; mocked in tests.
use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{CloneOverrides, Job, JobQuery, JobUpdate, Machine, MaintenanceLog, NewJob};
use super::reorder::OrderAssignment;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list_jobs(&self, query: &JobQuery) -> AppResult<Vec<Job>>;

    async fn create_job(&self, job: &NewJob) -> AppResult<Job>;

    async fn update_job(&self, id: Uuid, update: &JobUpdate) -> AppResult<Job>;

    async fn delete_job(&self, id: Uuid) -> AppResult<()>;

    async fn start_job(&self, id: Uuid, operator_name: &str) -> AppResult<()>;

    async fn pause_job(&self, id: Uuid, reason: &str, produced_so_far: i32) -> AppResult<()>;

    async fn resume_job(&self, id: Uuid) -> AppResult<()>;

    async fn complete_job(&self, id: Uuid) -> AppResult<()>;

    /// Create a new pending job pre-filled from a completed one.
    async fn clone_job(&self, id: Uuid, overrides: &CloneOverrides) -> AppResult<Job>;

    /// Apply a whole recomputed order batch in one request.
    async fn reorder_jobs(&self, batch: &[OrderAssignment]) -> AppResult<()>;

    async fn list_machines(&self) -> AppResult<Vec<Machine>>;

    async fn set_maintenance(
        &self,
        machine_id: Uuid,
        maintenance: bool,
        reason: Option<String>,
    ) -> AppResult<()>;

    async fn maintenance_logs(&self) -> AppResult<Vec<MaintenanceLog>>;
}
