use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::domain::repository::{AuthRepository, LoginRequest, UserAccount};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::ApiClient;

pub struct AuthRepositoryImpl {
    api: Arc<ApiClient>,
}

impl AuthRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn login(&self, request: LoginRequest) -> AppResult<UserAccount> {
        self.api.post_json("/users/login", &request).await
    }
}
