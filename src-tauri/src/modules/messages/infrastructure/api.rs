use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::messages::domain::entities::{Message, NewMessage};
use crate::modules::messages::domain::repository::MessageRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Ack, ApiClient};

pub struct MessageRepositoryImpl {
    api: Arc<ApiClient>,
}

impl MessageRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Message>> {
        self.api.get_json("/messages").await
    }

    async fn send(&self, message: &NewMessage) -> AppResult<Message> {
        self.api.post_json("/messages", message).await
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<()> {
        let _: Ack = self.api.put_empty(&format!("/messages/{}/read", id)).await?;
        Ok(())
    }
}
