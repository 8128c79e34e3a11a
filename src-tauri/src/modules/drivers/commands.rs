use super::application::tracker::LocationTracker;
use super::domain::entities::LocationFix;
use crate::modules::auth::{AuthService, Role};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct PushLocationFixRequest {
    pub lat: f64,
    pub lng: f64,
}

#[tauri::command]
#[specta::specta]
pub async fn start_location_tracking(
    tracker: State<'_, Arc<LocationTracker>>,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<(), String> {
    let session = auth_service.session(Role::Driver).map_err(|e| e.to_string())?;
    tracker.start(session.user_id);
    Ok(())
}

#[tauri::command]
#[specta::specta]
pub async fn push_location_fix(
    request: PushLocationFixRequest,
    tracker: State<'_, Arc<LocationTracker>>,
) -> Result<(), String> {
    let fix = LocationFix::new(request.lat, request.lng).map_err(|e| e.to_string())?;
    tracker.push_fix(fix).map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn stop_location_tracking(tracker: State<'_, Arc<LocationTracker>>) -> Result<(), String> {
    tracker.stop();
    Ok(())
}

/// Driver logout tears the location watch down before the session goes.
#[tauri::command]
#[specta::specta]
pub async fn driver_logout(
    tracker: State<'_, Arc<LocationTracker>>,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<(), String> {
    tracker.stop();
    auth_service.logout(Role::Driver).map_err(|e| e.to_string())
}
