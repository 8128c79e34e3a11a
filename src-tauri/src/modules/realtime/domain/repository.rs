/// Backend boundary for push-notification token registration.
///
/// The push infrastructure itself is external; the client only hands its
/// device token over after login.
use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Serialize)]
pub struct PushTokenRegistration {
    pub token: String,
    pub user_type: String,
    pub user_id: Uuid,
    pub platform: String,
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn register_push_token(&self, registration: &PushTokenRegistration) -> AppResult<()>;
}
