use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::modules::auth::Session;
use crate::modules::jobs::domain::entities::Job;
use crate::modules::jobs::JobService;
use crate::modules::shifts::domain::entities::{
    ReportDraft, ReportStatus, Shift, ShiftReport, ShiftStatus,
};
use crate::modules::shifts::domain::repository::{ReportSubmission, ShiftRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::UpdateGate;
use crate::log_info;

/// What `end_shift` resolved to.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EndShiftOutcome {
    /// No job was running anywhere; the shift ended immediately.
    Ended,
    /// Jobs are still running; the caller must pick a strategy
    /// (notify the operators, or fill the reports directly).
    ReportsRequired { active_jobs: Vec<Job> },
}

/// Client-side shift lifecycle controller.
pub struct ShiftService {
    repo: Arc<dyn ShiftRepository>,
    job_service: Arc<JobService>,
    current: RwLock<Option<Shift>>,
    gate: UpdateGate,
}

impl ShiftService {
    pub fn new(repo: Arc<dyn ShiftRepository>, job_service: Arc<JobService>) -> Self {
        Self {
            repo,
            job_service,
            current: RwLock::new(None),
            gate: UpdateGate::new(),
        }
    }

    // ---- snapshot ---------------------------------------------------------

    pub async fn refresh(&self) -> AppResult<()> {
        let token = self.gate.begin();
        let shift = self.repo.current_shift().await?;
        if self.gate.try_commit(token) {
            *self.current.write().unwrap() = shift;
        }
        Ok(())
    }

    pub fn current(&self) -> Option<Shift> {
        self.current.read().unwrap().clone()
    }

    pub fn status(&self) -> ShiftStatus {
        self.current()
            .map(|shift| shift.status)
            .unwrap_or(ShiftStatus::NotStarted)
    }

    fn active_shift(&self) -> AppResult<Shift> {
        self.current()
            .filter(|shift| shift.status == ShiftStatus::Active)
            .ok_or_else(|| AppError::Validation("No shift is active".to_string()))
    }

    fn set_current(&self, shift: Option<Shift>) {
        *self.current.write().unwrap() = shift;
    }

    // ---- lifecycle --------------------------------------------------------

    pub async fn start_shift(&self) -> AppResult<Shift> {
        if self.status() == ShiftStatus::Active {
            return Err(AppError::Validation(
                "A shift is already active".to_string(),
            ));
        }

        let shift = self.repo.start_shift().await?;
        log_info!("Shift {} started", shift.id);
        self.set_current(Some(shift.clone()));
        Ok(shift)
    }

    /// End the shift if nothing is running; otherwise hand back the list of
    /// running jobs so the caller can choose a strategy.
    pub async fn end_shift(&self) -> AppResult<EndShiftOutcome> {
        let shift = self.active_shift()?;

        let active_jobs = self.job_service.active_jobs();
        if !active_jobs.is_empty() {
            return Ok(EndShiftOutcome::ReportsRequired { active_jobs });
        }

        self.repo.end_shift().await?;
        log_info!("Shift {} ended with no running jobs", shift.id);
        self.set_current(Some(Shift {
            status: ShiftStatus::Ended,
            ended_at: Some(chrono::Utc::now()),
            ..shift
        }));
        Ok(EndShiftOutcome::Ended)
    }

    /// Strategy (a): push a "please report" notice to every operator with a
    /// running job. The shift stays active until the reports are approved.
    pub async fn notify_operators(&self) -> AppResult<()> {
        self.active_shift()?;
        if self.job_service.active_jobs().is_empty() {
            return Err(AppError::Validation(
                "No running job needs a report".to_string(),
            ));
        }
        self.repo.request_end().await?;
        log_info!("Shift-end reports requested from operators");
        Ok(())
    }

    /// Strategy (b): management supplies every report itself and the shift
    /// ends immediately; no approval step, management is the author.
    pub async fn end_with_reports(&self, session: &Session, drafts: Vec<ReportDraft>) -> AppResult<()> {
        let shift = self.active_shift()?;

        let active_jobs = self.job_service.active_jobs();
        let submissions = self.normalize_against_jobs(&active_jobs, drafts, Some(&session.display_name))?;
        if submissions.len() != active_jobs.len() {
            return Err(AppError::Validation(format!(
                "Expected a report for each of the {} running jobs",
                active_jobs.len()
            )));
        }

        self.repo.end_with_reports(&submissions).await?;
        log_info!("Shift {} ended with {} management-filled reports", shift.id, submissions.len());
        self.set_current(Some(Shift {
            status: ShiftStatus::Ended,
            ended_at: Some(chrono::Utc::now()),
            ..shift
        }));
        Ok(())
    }

    /// Operator path after a shift-end notice: one report for the
    /// operator's own running job, entering `pending_approval`.
    pub async fn submit_operator_report(&self, session: &Session, draft: ReportDraft) -> AppResult<ShiftReport> {
        self.active_shift()?;

        let job = self
            .job_service
            .active_jobs()
            .into_iter()
            .find(|job| job.id == draft.job_id)
            .ok_or_else(|| AppError::NotFound("The reported job is not running".to_string()))?;

        let normalized = draft.normalized(job.koli_count)?;
        let report = self
            .repo
            .submit_report(&ReportSubmission {
                job_id: normalized.job_id,
                operator_name: Some(session.display_name.clone()),
                produced_koli: normalized.produced_koli,
                defect_weight_kg: normalized.defect_weight_kg,
                completed: normalized.completed,
            })
            .await?;

        // Keep the local shift's report list current until the next poll
        if let Some(mut shift) = self.current() {
            shift.reports.retain(|existing| existing.id != report.id);
            shift.reports.push(report.clone());
            self.set_current(Some(shift));
        }
        Ok(report)
    }

    /// Approve a single report; the shift stays active so other reports
    /// can still be corrected.
    pub async fn approve_report(&self, report_id: Uuid) -> AppResult<()> {
        self.active_shift()?;
        self.repo.approve_report(report_id).await?;

        if let Some(mut shift) = self.current() {
            for report in &mut shift.reports {
                if report.id == report_id {
                    report.status = ReportStatus::Approved;
                }
            }
            self.set_current(Some(shift));
        }
        Ok(())
    }

    /// Fast path: approve every pending report and end the shift.
    pub async fn approve_all_and_end_shift(&self) -> AppResult<()> {
        let mut shift = self.active_shift()?;
        self.repo.approve_all().await?;

        for report in &mut shift.reports {
            report.status = ReportStatus::Approved;
        }
        shift.status = ShiftStatus::Ended;
        shift.ended_at = Some(chrono::Utc::now());
        log_info!("Shift {} ended, all reports approved", shift.id);
        self.set_current(Some(shift));
        Ok(())
    }

    fn normalize_against_jobs(
        &self,
        active_jobs: &[Job],
        drafts: Vec<ReportDraft>,
        author: Option<&str>,
    ) -> AppResult<Vec<ReportSubmission>> {
        drafts
            .into_iter()
            .map(|draft| {
                let job = active_jobs
                    .iter()
                    .find(|job| job.id == draft.job_id)
                    .ok_or_else(|| {
                        AppError::Validation(format!("Job {} is not running", draft.job_id))
                    })?;
                let normalized = draft.normalized(job.koli_count)?;
                Ok(ReportSubmission {
                    job_id: normalized.job_id,
                    operator_name: author.map(|name| name.to_string()),
                    produced_koli: normalized.produced_koli,
                    defect_weight_kg: normalized.defect_weight_kg,
                    completed: normalized.completed,
                })
            })
            .collect()
    }
}
