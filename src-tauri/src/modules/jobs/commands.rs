use super::application::service::JobService;
use super::domain::entities::{CloneOverrides, Job, JobStatus, JobUpdate, Machine, MaintenanceLog, NewJob};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct GetJobsRequest {
    pub machine_id: Option<Uuid>,
    pub status: Option<JobStatus>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct StartJobRequest {
    pub job_id: Uuid,
    pub operator_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct PauseJobRequest {
    pub job_id: Uuid,
    pub reason: String,
    pub produced_so_far: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct JobIdRequest {
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct CreateJobRequest {
    pub job: NewJob,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct UpdateJobRequest {
    pub job_id: Uuid,
    pub update: JobUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct CloneJobRequest {
    pub job_id: Uuid,
    pub overrides: CloneOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ReorderJobsRequest {
    pub machine_id: Uuid,
    pub moved_job_id: Uuid,
    pub new_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SetMaintenanceRequest {
    pub machine_id: Uuid,
    pub maintenance: bool,
    pub reason: Option<String>,
}

#[tauri::command]
#[specta::specta]
pub async fn get_jobs(
    request: GetJobsRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<Vec<Job>, String> {
    match request.machine_id {
        Some(machine_id) => Ok(job_service.jobs_for_machine(
            machine_id,
            request.status,
            request.format.as_deref(),
        )),
        None => Ok(job_service.all_jobs()),
    }
}

#[tauri::command]
#[specta::specta]
pub async fn get_machines(job_service: State<'_, Arc<JobService>>) -> Result<Vec<Machine>, String> {
    Ok(job_service.machines())
}

#[tauri::command]
#[specta::specta]
pub async fn refresh_job_board(job_service: State<'_, Arc<JobService>>) -> Result<(), String> {
    job_service.refresh().await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn start_job(
    request: StartJobRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<(), String> {
    job_service
        .start(request.job_id, &request.operator_name)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn pause_job(
    request: PauseJobRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<(), String> {
    job_service
        .pause(request.job_id, &request.reason, request.produced_so_far)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn resume_job(
    request: JobIdRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<(), String> {
    job_service.resume(request.job_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn complete_job(
    request: JobIdRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<(), String> {
    job_service.complete(request.job_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn create_job(
    request: CreateJobRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<Job, String> {
    job_service.create(request.job).await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn update_job(
    request: UpdateJobRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<Job, String> {
    job_service
        .update(request.job_id, request.update)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn delete_job(
    request: JobIdRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<(), String> {
    job_service.delete(request.job_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn clone_job(
    request: CloneJobRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<Job, String> {
    job_service
        .clone_job(request.job_id, request.overrides)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn reorder_jobs(
    request: ReorderJobsRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<(), String> {
    job_service
        .reorder(request.machine_id, request.moved_job_id, request.new_index as usize)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn set_machine_maintenance(
    request: SetMaintenanceRequest,
    job_service: State<'_, Arc<JobService>>,
) -> Result<(), String> {
    job_service
        .set_maintenance(request.machine_id, request.maintenance, request.reason)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn get_maintenance_logs(
    job_service: State<'_, Arc<JobService>>,
) -> Result<Vec<MaintenanceLog>, String> {
    job_service.maintenance_logs().await.map_err(|e| e.to_string())
}
