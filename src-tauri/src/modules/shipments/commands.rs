use super::application::service::ShipmentService;
use super::domain::entities::{NewShipment, Shipment};
use crate::modules::auth::{AuthService, Role};
use crate::modules::drivers::LocationTracker;
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;
use tauri_plugin_opener::OpenerExt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct CreateShipmentRequest {
    pub shipment: NewShipment,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ShipmentIdRequest {
    pub shipment_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct MarkShipmentFailedRequest {
    pub shipment_id: Uuid,
    pub reason: String,
}

#[tauri::command]
#[specta::specta]
pub async fn get_shipments(
    shipment_service: State<'_, Arc<ShipmentService>>,
) -> Result<Vec<Shipment>, String> {
    Ok(shipment_service.all())
}

#[tauri::command]
#[specta::specta]
pub async fn get_driver_shipments(
    shipment_service: State<'_, Arc<ShipmentService>>,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<Vec<Shipment>, String> {
    let session = auth_service.session(Role::Driver).map_err(|e| e.to_string())?;
    Ok(shipment_service.for_driver(session.user_id))
}

#[tauri::command]
#[specta::specta]
pub async fn create_shipment(
    request: CreateShipmentRequest,
    shipment_service: State<'_, Arc<ShipmentService>>,
) -> Result<Shipment, String> {
    shipment_service
        .create(request.shipment)
        .await
        .map_err(|e| e.to_string())
}

/// Move the shipment on the road; the driver's continuous location
/// reporting starts alongside it.
#[tauri::command]
#[specta::specta]
pub async fn start_delivery(
    request: ShipmentIdRequest,
    shipment_service: State<'_, Arc<ShipmentService>>,
    auth_service: State<'_, Arc<AuthService>>,
    tracker: State<'_, Arc<LocationTracker>>,
) -> Result<Shipment, String> {
    let session = auth_service.session(Role::Driver).map_err(|e| e.to_string())?;
    let shipment = shipment_service
        .start_delivery(request.shipment_id)
        .await
        .map_err(|e| e.to_string())?;
    tracker.start(session.user_id);
    Ok(shipment)
}

#[tauri::command]
#[specta::specta]
pub async fn mark_shipment_delivered(
    request: ShipmentIdRequest,
    shipment_service: State<'_, Arc<ShipmentService>>,
) -> Result<(), String> {
    shipment_service
        .mark_delivered(request.shipment_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn mark_shipment_failed(
    request: MarkShipmentFailedRequest,
    shipment_service: State<'_, Arc<ShipmentService>>,
) -> Result<(), String> {
    shipment_service
        .mark_failed(request.shipment_id, &request.reason)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn delete_shipment(
    request: ShipmentIdRequest,
    shipment_service: State<'_, Arc<ShipmentService>>,
) -> Result<(), String> {
    shipment_service
        .delete(request.shipment_id)
        .await
        .map_err(|e| e.to_string())
}

/// Advisory only: hands the delivery address to the platform's map
/// application. Shipment state is untouched.
#[tauri::command]
#[specta::specta]
pub async fn open_route_assist(
    request: ShipmentIdRequest,
    shipment_service: State<'_, Arc<ShipmentService>>,
    app: tauri::AppHandle,
) -> Result<(), String> {
    let shipment = shipment_service
        .all()
        .into_iter()
        .find(|shipment| shipment.id == request.shipment_id)
        .ok_or_else(|| "Shipment is no longer listed".to_string())?;

    let url = format!(
        "https://www.google.com/maps/dir/?api=1&destination={}",
        urlencoding::encode(&shipment.address)
    );
    app.opener()
        .open_url(url, None::<&str>)
        .map_err(|e| e.to_string())
}
