use super::application::notifier::RealtimeNotifier;
use super::domain::events::ConnectionStatus;
use super::domain::repository::{NotificationRepository, PushTokenRegistration};
use crate::modules::auth::{AuthService, Role};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct RegisterPushTokenRequest {
    pub role: Role,
    pub token: String,
    pub platform: String,
}

#[tauri::command]
#[specta::specta]
pub async fn get_realtime_status(
    notifier: State<'_, Arc<RealtimeNotifier>>,
) -> Result<ConnectionStatus, String> {
    Ok(notifier.status())
}

#[tauri::command]
#[specta::specta]
pub async fn register_push_token(
    request: RegisterPushTokenRequest,
    notification_repo: State<'_, Arc<dyn NotificationRepository>>,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<(), String> {
    let session = auth_service.session(request.role).map_err(|e| e.to_string())?;
    notification_repo
        .register_push_token(&PushTokenRegistration {
            token: request.token,
            user_type: request.role.wire_name().to_string(),
            user_id: session.user_id,
            platform: request.platform,
        })
        .await
        .map_err(|e| e.to_string())
}
