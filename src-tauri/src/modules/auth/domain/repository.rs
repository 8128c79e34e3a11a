/// Authentication boundary towards the backend.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
    pub role: String,
}

/// User record returned by `POST /users/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub token: Option<String>,
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, request: LoginRequest) -> AppResult<UserAccount>;
}
