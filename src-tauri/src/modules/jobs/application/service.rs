use std::sync::Arc;
use uuid::Uuid;

use crate::modules::jobs::domain::entities::{
    CloneOverrides, Job, JobQuery, JobStatus, JobUpdate, Machine, MaintenanceLog, NewJob,
};
use crate::modules::jobs::domain::reorder;
use crate::modules::jobs::domain::repository::JobRepository;
use crate::shared::application::{speculate, speculate_removal};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::EntityStore;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Client-side job lifecycle controller.
///
/// Enforces the state machine before any transition request goes out and
/// reconciles the local board after each response. The next poll settles
/// whatever the optimistic prediction got wrong.
pub struct JobService {
    repo: Arc<dyn JobRepository>,
    jobs: Arc<EntityStore<Job>>,
    machines: Arc<EntityStore<Machine>>,
}

impl JobService {
    pub fn new(repo: Arc<dyn JobRepository>) -> Self {
        Self {
            repo,
            jobs: Arc::new(EntityStore::new()),
            machines: Arc::new(EntityStore::new()),
        }
    }

    // ---- snapshots --------------------------------------------------------

    /// Refetch the whole board. Stale overlapping responses are discarded
    /// by the store's version gate.
    pub async fn refresh(&self) -> AppResult<()> {
        let token = self.jobs.begin_fetch();
        let jobs = self.repo.list_jobs(&JobQuery::default()).await?;
        self.jobs.apply_snapshot(token, jobs);

        let token = self.machines.begin_fetch();
        let machines = self.repo.list_machines().await?;
        self.machines.apply_snapshot(token, machines);
        Ok(())
    }

    pub fn machines(&self) -> Vec<Machine> {
        let mut machines = self.machines.all();
        machines.sort_by(|a, b| a.name.cmp(&b.name));
        machines
    }

    /// Jobs on a machine, optionally narrowed by status and format tag,
    /// in queue order.
    pub fn jobs_for_machine(
        &self,
        machine_id: Uuid,
        status: Option<JobStatus>,
        format: Option<&str>,
    ) -> Vec<Job> {
        let mut jobs = self.jobs.filter(|job| {
            job.machine_id == machine_id
                && status.map_or(true, |wanted| job.status == wanted)
                && format.map_or(true, |tag| job.format.as_deref() == Some(tag))
        });
        jobs.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));
        jobs
    }

    pub fn all_jobs(&self) -> Vec<Job> {
        let mut jobs = self.jobs.all();
        jobs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        jobs
    }

    /// The machine's running job, if any. At most one exists per machine.
    pub fn active_job_for_machine(&self, machine_id: Uuid) -> Option<Job> {
        self.jobs
            .filter(|job| job.machine_id == machine_id && job.status == JobStatus::InProgress)
            .into_iter()
            .next()
    }

    pub fn active_jobs(&self) -> Vec<Job> {
        self.jobs.filter(|job| job.status == JobStatus::InProgress)
    }

    fn job(&self, id: Uuid) -> AppResult<Job> {
        self.jobs
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Job {} is no longer listed", id)))
    }

    // ---- lifecycle transitions -------------------------------------------

    pub async fn start(&self, job_id: Uuid, operator_name: &str) -> AppResult<()> {
        Validator::validate_required_text("Operator name", operator_name)?;
        let job = self.job(job_id)?;

        if !job.status.can_start() {
            return Err(AppError::Validation(format!(
                "Job '{}' is {} and cannot be started",
                job.name, job.status
            )));
        }
        if let Some(running) = self.active_job_for_machine(job.machine_id) {
            return Err(AppError::Validation(format!(
                "'{}' is already running on {}",
                running.name, job.machine_name
            )));
        }

        log_info!("Starting job '{}' on {}", job.name, job.machine_name);
        speculate(
            &self.jobs,
            job.started(operator_name),
            self.repo.start_job(job_id, operator_name),
        )
        .await
    }

    pub async fn pause(&self, job_id: Uuid, reason: &str, produced_so_far: i32) -> AppResult<()> {
        Validator::validate_reason(reason)?;
        let job = self.job(job_id)?;

        if !job.status.can_pause() {
            return Err(AppError::Validation(format!(
                "Job '{}' is {} and cannot be paused",
                job.name, job.status
            )));
        }
        if produced_so_far < 0 {
            return Err(AppError::Validation(
                "Produced koli count cannot be negative".to_string(),
            ));
        }

        log_info!("Pausing job '{}' ({} koli so far)", job.name, produced_so_far);
        speculate(
            &self.jobs,
            job.paused(reason, produced_so_far),
            self.repo.pause_job(job_id, reason.trim(), produced_so_far),
        )
        .await
    }

    pub async fn resume(&self, job_id: Uuid) -> AppResult<()> {
        let job = self.job(job_id)?;

        if !job.status.can_resume() {
            return Err(AppError::Validation(format!(
                "Job '{}' is {} and cannot be resumed",
                job.name, job.status
            )));
        }
        if let Some(running) = self.active_job_for_machine(job.machine_id) {
            return Err(AppError::Validation(format!(
                "'{}' is already running on {}",
                running.name, job.machine_name
            )));
        }

        log_info!("Resuming job '{}'", job.name);
        speculate(&self.jobs, job.resumed(), self.repo.resume_job(job_id)).await
    }

    pub async fn complete(&self, job_id: Uuid) -> AppResult<()> {
        let job = self.job(job_id)?;

        if !job.status.can_complete() {
            return Err(AppError::Validation(format!(
                "Job '{}' is {} and cannot be completed",
                job.name, job.status
            )));
        }

        log_info!("Completing job '{}'", job.name);
        speculate(&self.jobs, job.completed(), self.repo.complete_job(job_id)).await
    }

    // ---- planning operations ---------------------------------------------

    pub async fn create(&self, new_job: NewJob) -> AppResult<Job> {
        Validator::validate_required_text("Job name", &new_job.name)?;
        Validator::validate_positive_count("Koli count", new_job.koli_count)?;
        if new_job.colors.iter().all(|c| c.trim().is_empty()) {
            return Err(AppError::Validation("At least one color is required".to_string()));
        }
        if let Some(machine) = self.machines.get(new_job.machine_id) {
            if machine.maintenance {
                return Err(AppError::Validation(format!(
                    "{} is in maintenance",
                    machine.name
                )));
            }
        }

        let created = self.repo.create_job(&new_job).await?;
        self.jobs.upsert(created.clone());
        log_info!("Created job '{}' for {}", created.name, created.machine_name);
        Ok(created)
    }

    pub async fn update(&self, job_id: Uuid, update: JobUpdate) -> AppResult<Job> {
        Validator::validate_required_text("Job name", &update.name)?;
        Validator::validate_positive_count("Koli count", update.koli_count)?;
        self.job(job_id)?;

        let updated = self.repo.update_job(job_id, &update).await?;
        self.jobs.upsert(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, job_id: Uuid) -> AppResult<()> {
        let job = self.job(job_id)?;
        if job.status == JobStatus::InProgress {
            return Err(AppError::Validation(
                "A running job cannot be deleted".to_string(),
            ));
        }

        speculate_removal(&self.jobs, job_id, self.repo.delete_job(job_id)).await
    }

    /// New pending job pre-filled from a completed one; the original is
    /// not touched.
    pub async fn clone_job(&self, job_id: Uuid, overrides: CloneOverrides) -> AppResult<Job> {
        let source = self.job(job_id)?;
        if source.status != JobStatus::Completed {
            return Err(AppError::Validation(
                "Only completed jobs can be cloned".to_string(),
            ));
        }
        if let Some(count) = overrides.koli_count {
            Validator::validate_positive_count("Koli count", count)?;
        }

        let cloned = self.repo.clone_job(job_id, &overrides).await?;
        self.jobs.upsert(cloned.clone());
        log_info!("Cloned '{}' into new pending job '{}'", source.name, cloned.name);
        Ok(cloned)
    }

    /// Move one pending job to `new_index` within its machine's queue and
    /// push the recomputed batch in a single request.
    pub async fn reorder(&self, machine_id: Uuid, moved_job_id: Uuid, new_index: usize) -> AppResult<()> {
        let pending = self.jobs_for_machine(machine_id, Some(JobStatus::Pending), None);
        let batch = reorder::reorder(&pending, moved_job_id, new_index)?;

        // Speculative apply for the whole batch, with a collective rollback
        let mut previous: Vec<(Uuid, Option<Job>)> = Vec::with_capacity(batch.len());
        for assignment in &batch {
            if let Some(mut job) = self.jobs.get(assignment.job_id) {
                job.order = assignment.order;
                previous.push((assignment.job_id, self.jobs.upsert(job)));
            }
        }

        match self.repo.reorder_jobs(&batch).await {
            Ok(()) => Ok(()),
            Err(err) => {
                for (id, prior) in previous {
                    self.jobs.restore(id, prior);
                }
                Err(err)
            }
        }
    }

    // ---- machines ---------------------------------------------------------

    pub async fn set_maintenance(
        &self,
        machine_id: Uuid,
        maintenance: bool,
        reason: Option<String>,
    ) -> AppResult<()> {
        let machine = self
            .machines
            .get(machine_id)
            .ok_or_else(|| AppError::NotFound(format!("Machine {} is unknown", machine_id)))?;
        if maintenance {
            Validator::validate_reason(reason.as_deref().unwrap_or(""))?;
        }

        log_debug!("Setting maintenance={} on {}", maintenance, machine.name);
        self.repo
            .set_maintenance(machine_id, maintenance, reason.clone())
            .await?;

        let mut updated = machine;
        updated.maintenance = maintenance;
        updated.maintenance_reason = reason;
        self.machines.upsert(updated);
        Ok(())
    }

    pub async fn maintenance_logs(&self) -> AppResult<Vec<MaintenanceLog>> {
        self.repo.maintenance_logs().await
    }
}
