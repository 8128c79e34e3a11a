use super::application::service::PaintService;
use super::domain::entities::{MovementRequest, PaintColor, PaintMovement};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct CreatePaintColorRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct PaintColorIdRequest {
    pub color_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct RecordMovementRequest {
    pub color_id: Uuid,
    pub movement: MovementRequest,
}

#[tauri::command]
#[specta::specta]
pub async fn get_paint_colors(
    paint_service: State<'_, Arc<PaintService>>,
) -> Result<Vec<PaintColor>, String> {
    Ok(paint_service.colors())
}

#[tauri::command]
#[specta::specta]
pub async fn refresh_paint_colors(
    paint_service: State<'_, Arc<PaintService>>,
) -> Result<(), String> {
    paint_service.refresh().await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn create_paint_color(
    request: CreatePaintColorRequest,
    paint_service: State<'_, Arc<PaintService>>,
) -> Result<PaintColor, String> {
    paint_service
        .create_color(&request.name)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn get_paint_movements(
    request: PaintColorIdRequest,
    paint_service: State<'_, Arc<PaintService>>,
) -> Result<Vec<PaintMovement>, String> {
    paint_service
        .movements(request.color_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn record_paint_movement(
    request: RecordMovementRequest,
    paint_service: State<'_, Arc<PaintService>>,
) -> Result<PaintMovement, String> {
    paint_service
        .record_movement(request.color_id, request.movement)
        .await
        .map_err(|e| e.to_string())
}
