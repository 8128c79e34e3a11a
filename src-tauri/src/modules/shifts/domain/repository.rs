/// Backend boundary for the shift lifecycle.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entities::{Shift, ShiftReport};
use crate::shared::errors::AppResult;

/// Normalized report payload as sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub job_id: Uuid,
    pub operator_name: Option<String>,
    pub produced_koli: i32,
    pub defect_weight_kg: f64,
    pub completed: bool,
}

#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// Active shift with its reports, if one exists.
    async fn current_shift(&self) -> AppResult<Option<Shift>>;

    async fn start_shift(&self) -> AppResult<Shift>;

    /// Immediate end; only valid when no job is running.
    async fn end_shift(&self) -> AppResult<()>;

    /// Push a "please report" notice to every operator with a running job.
    async fn request_end(&self) -> AppResult<()>;

    /// Management fills every report itself; the shift ends in the same
    /// request and no approval round-trip happens.
    async fn end_with_reports(&self, reports: &[ReportSubmission]) -> AppResult<()>;

    /// Operator-authored report; enters `pending_approval`.
    async fn submit_report(&self, report: &ReportSubmission) -> AppResult<ShiftReport>;

    async fn approve_report(&self, report_id: Uuid) -> AppResult<()>;

    /// Approve every pending report and end the shift in one action.
    async fn approve_all(&self) -> AppResult<()>;
}
