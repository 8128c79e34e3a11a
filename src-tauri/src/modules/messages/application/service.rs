use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::Session;
use crate::modules::messages::domain::entities::{Message, NewMessage};
use crate::modules::messages::domain::repository::MessageRepository;
use crate::shared::application::speculate;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::EntityStore;
use crate::shared::utils::Validator;

pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
    messages: Arc<EntityStore<Message>>,
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self {
            repo,
            messages: Arc::new(EntityStore::new()),
        }
    }

    pub async fn refresh(&self) -> AppResult<()> {
        let token = self.messages.begin_fetch();
        let messages = self.repo.list().await?;
        self.messages.apply_snapshot(token, messages);
        Ok(())
    }

    pub fn messages(&self) -> Vec<Message> {
        let mut messages = self.messages.all();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    pub fn unread_count(&self) -> usize {
        self.messages.filter(|message| !message.read).len()
    }

    pub async fn send(&self, session: &Session, body: &str) -> AppResult<Message> {
        Validator::validate_required_text("Message", body)?;

        let sent = self
            .repo
            .send(&NewMessage {
                sender_role: session.role.wire_name().to_string(),
                sender_name: session.display_name.clone(),
                body: body.trim().to_string(),
            })
            .await?;
        self.messages.upsert(sent.clone());
        Ok(sent)
    }

    pub async fn mark_read(&self, id: Uuid) -> AppResult<()> {
        let message = self
            .messages
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Message {} is no longer listed", id)))?;

        let mut predicted = message;
        predicted.read = true;
        speculate(&self.messages, predicted, self.repo.mark_read(id)).await
    }
}
