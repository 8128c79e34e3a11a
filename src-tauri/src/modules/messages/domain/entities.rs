use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use crate::shared::infrastructure::HasId;

/// A message on the factory board.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Message {
    pub id: Uuid,
    pub sender_role: String,
    pub sender_name: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl HasId for Message {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct NewMessage {
    pub sender_role: String,
    pub sender_name: String,
    pub body: String,
}
