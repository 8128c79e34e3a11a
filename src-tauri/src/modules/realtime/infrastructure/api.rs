use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::realtime::domain::repository::{NotificationRepository, PushTokenRegistration};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Ack, ApiClient};

pub struct NotificationRepositoryImpl {
    api: Arc<ApiClient>,
}

impl NotificationRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn register_push_token(&self, registration: &PushTokenRegistration) -> AppResult<()> {
        let _: Ack = self
            .api
            .post_json("/notifications/register-token", registration)
            .await?;
        Ok(())
    }
}
