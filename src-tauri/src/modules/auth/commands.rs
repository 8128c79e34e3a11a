use super::application::service::AuthService;
use super::domain::session::{Role, Session};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct LoginOperatorRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct LoginDriverRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct LoginWithPasswordRequest {
    pub role: Role,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SessionRoleRequest {
    pub role: Role,
}

#[tauri::command]
#[specta::specta]
pub async fn login_operator(
    request: LoginOperatorRequest,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<Session, String> {
    auth_service
        .login_operator(&request.name)
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn login_driver(
    request: LoginDriverRequest,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<Session, String> {
    auth_service
        .login_driver(&request.username, &request.password)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn login_with_password(
    request: LoginWithPasswordRequest,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<Session, String> {
    auth_service
        .login_with_password(request.role, &request.password)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn restore_session(
    request: SessionRoleRequest,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<Option<Session>, String> {
    Ok(auth_service.restore(request.role))
}

#[tauri::command]
#[specta::specta]
pub async fn logout(
    request: SessionRoleRequest,
    auth_service: State<'_, Arc<AuthService>>,
) -> Result<(), String> {
    auth_service.logout(request.role).map_err(|e| e.to_string())
}
