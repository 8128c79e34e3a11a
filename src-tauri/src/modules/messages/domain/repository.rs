/// Backend boundary for messaging.
use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Message, NewMessage};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Message>>;

    async fn send(&self, message: &NewMessage) -> AppResult<Message>;

    async fn mark_read(&self, id: Uuid) -> AppResult<()>;
}
