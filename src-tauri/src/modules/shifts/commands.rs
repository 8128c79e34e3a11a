use super::application::service::{EndShiftOutcome, ShiftService};
use super::domain::entities::{ReportDraft, Shift, ShiftReport, ShiftStatus};
use crate::modules::auth::{AuthService, Role};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct EndShiftWithReportsRequest {
    pub reports: Vec<ReportDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SubmitReportRequest {
    pub report: ReportDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ApproveReportRequest {
    pub report_id: Uuid,
}

#[tauri::command]
#[specta::specta]
pub async fn get_current_shift(
    shift_service: State<'_, Arc<ShiftService>>,
) -> Result<Option<Shift>, String> {
    Ok(shift_service.current())
}

#[tauri::command]
#[specta::specta]
pub async fn get_shift_status(
    shift_service: State<'_, Arc<ShiftService>>,
) -> Result<ShiftStatus, String> {
    Ok(shift_service.status())
}

#[tauri::command]
#[specta::specta]
pub async fn start_shift(shift_service: State<'_, Arc<ShiftService>>) -> Result<Shift, String> {
    shift_service.start_shift().await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn end_shift(
    shift_service: State<'_, Arc<ShiftService>>,
) -> Result<EndShiftOutcome, String> {
    shift_service.end_shift().await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn notify_operators_for_shift_end(
    shift_service: State<'_, Arc<ShiftService>>,
) -> Result<(), String> {
    shift_service.notify_operators().await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn end_shift_with_reports(
    request: EndShiftWithReportsRequest,
    shift_service: State<'_, Arc<ShiftService>>,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<(), String> {
    let session = auth_service.session(Role::Management).map_err(|e| e.to_string())?;
    shift_service
        .end_with_reports(&session, request.reports)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn submit_operator_report(
    request: SubmitReportRequest,
    shift_service: State<'_, Arc<ShiftService>>,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<ShiftReport, String> {
    let session = auth_service.session(Role::Operator).map_err(|e| e.to_string())?;
    shift_service
        .submit_operator_report(&session, request.report)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn approve_report(
    request: ApproveReportRequest,
    shift_service: State<'_, Arc<ShiftService>>,
) -> Result<(), String> {
    shift_service
        .approve_report(request.report_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn approve_all_and_end_shift(
    shift_service: State<'_, Arc<ShiftService>>,
) -> Result<(), String> {
    shift_service
        .approve_all_and_end_shift()
        .await
        .map_err(|e| e.to_string())
}
