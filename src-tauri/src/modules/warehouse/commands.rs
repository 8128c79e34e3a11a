use super::application::service::WarehouseService;
use super::domain::entities::{
    NewPalletScan, NewWarehouseRequest, Pallet, PalletScan, WarehouseRequest,
};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct CreateWarehouseRequestRequest {
    pub request: NewWarehouseRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct CompleteWarehouseRequestRequest {
    pub request_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ScanPalletRequest {
    pub scan: NewPalletScan,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SearchPalletsRequest {
    pub query: String,
    pub warehouse: Option<String>,
}

#[tauri::command]
#[specta::specta]
pub async fn get_warehouse_requests(
    warehouse_service: State<'_, Arc<WarehouseService>>,
) -> Result<Vec<WarehouseRequest>, String> {
    Ok(warehouse_service.pending_requests())
}

#[tauri::command]
#[specta::specta]
pub async fn create_warehouse_request(
    request: CreateWarehouseRequestRequest,
    warehouse_service: State<'_, Arc<WarehouseService>>,
) -> Result<WarehouseRequest, String> {
    warehouse_service
        .create_request(request.request)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn complete_warehouse_request(
    request: CompleteWarehouseRequestRequest,
    warehouse_service: State<'_, Arc<WarehouseService>>,
) -> Result<(), String> {
    warehouse_service
        .complete_request(request.request_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn scan_pallet(
    request: ScanPalletRequest,
    warehouse_service: State<'_, Arc<WarehouseService>>,
) -> Result<PalletScan, String> {
    warehouse_service
        .scan_pallet(request.scan)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn get_pallet_scans(
    warehouse_service: State<'_, Arc<WarehouseService>>,
) -> Result<Vec<PalletScan>, String> {
    warehouse_service.pallet_scans().await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn search_pallets(
    request: SearchPalletsRequest,
    warehouse_service: State<'_, Arc<WarehouseService>>,
) -> Result<Vec<Pallet>, String> {
    Ok(warehouse_service.search_pallets(&request.query, request.warehouse.as_deref()))
}
