use super::application::service::MessageService;
use super::domain::entities::Message;
use crate::modules::auth::{AuthService, Role};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SendMessageRequest {
    pub role: Role,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct MarkMessageReadRequest {
    pub message_id: Uuid,
}

#[tauri::command]
#[specta::specta]
pub async fn get_messages(
    message_service: State<'_, Arc<MessageService>>,
) -> Result<Vec<Message>, String> {
    Ok(message_service.messages())
}

#[tauri::command]
#[specta::specta]
pub async fn get_unread_message_count(
    message_service: State<'_, Arc<MessageService>>,
) -> Result<u32, String> {
    Ok(message_service.unread_count() as u32)
}

#[tauri::command]
#[specta::specta]
pub async fn send_message(
    request: SendMessageRequest,
    message_service: State<'_, Arc<MessageService>>,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<Message, String> {
    let session = auth_service.session(request.role).map_err(|e| e.to_string())?;
    message_service
        .send(&session, &request.body)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn mark_message_read(
    request: MarkMessageReadRequest,
    message_service: State<'_, Arc<MessageService>>,
) -> Result<(), String> {
    message_service
        .mark_read(request.message_id)
        .await
        .map_err(|e| e.to_string())
}
