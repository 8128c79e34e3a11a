use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::context::SessionContext;
use crate::modules::auth::domain::repository::{AuthRepository, LoginRequest};
use crate::modules::auth::domain::session::{Role, Session};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::log_info;

pub struct AuthService {
    repo: Arc<dyn AuthRepository>,
    context: Arc<SessionContext>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AuthRepository>, context: Arc<SessionContext>) -> Self {
        Self { repo, context }
    }

    /// Operators identify with a display name only; no server credential
    /// exists for the role.
    pub fn login_operator(&self, name: &str) -> AppResult<Session> {
        Validator::validate_required_text("Operator name", name)?;
        let session = Session::new(Uuid::new_v4(), Role::Operator, name.trim().to_string(), None);
        let session = self.context.establish(session)?;
        log_info!("Operator '{}' logged in", session.display_name);
        Ok(session)
    }

    /// Drivers authenticate with username + password against the backend.
    pub async fn login_driver(&self, username: &str, password: &str) -> AppResult<Session> {
        Validator::validate_required_text("Username", username)?;
        Validator::validate_required_text("Password", password)?;

        let account = self
            .repo
            .login(LoginRequest {
                username: Some(username.trim().to_string()),
                password: password.to_string(),
                role: Role::Driver.wire_name().to_string(),
            })
            .await?;

        let session = Session::new(account.id, Role::Driver, account.name, account.token);
        let session = self.context.establish(session)?;
        log_info!("Driver '{}' logged in", session.display_name);
        Ok(session)
    }

    /// Plan / management / warehouse / paint gates take a per-role password
    /// checked server-side.
    pub async fn login_with_password(&self, role: Role, password: &str) -> AppResult<Session> {
        if matches!(role, Role::Operator | Role::Driver) {
            return Err(AppError::Validation(format!(
                "The {} role has its own login flow",
                role
            )));
        }
        Validator::validate_required_text("Password", password)?;

        let account = self
            .repo
            .login(LoginRequest {
                username: None,
                password: password.to_string(),
                role: role.wire_name().to_string(),
            })
            .await?;

        let session = Session::new(account.id, role, account.name, account.token);
        let session = self.context.establish(session)?;
        log_info!("{} panel unlocked", role);
        Ok(session)
    }

    /// Non-expired persisted session for `role`, if any. Presence of a
    /// valid blob skips the login screen.
    pub fn restore(&self, role: Role) -> Option<Session> {
        self.context.peek(role).filter(|session| !session.is_expired())
    }

    pub fn session(&self, role: Role) -> AppResult<Session> {
        self.context.current(role)
    }

    pub fn logout(&self, role: Role) -> AppResult<()> {
        self.context.clear(role)?;
        log_info!("{} session cleared", role);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::infrastructure::session_store::SessionStore;
    use async_trait::async_trait;
    use crate::modules::auth::domain::repository::UserAccount;

    struct StaticAuthRepo;

    #[async_trait]
    impl AuthRepository for StaticAuthRepo {
        async fn login(&self, request: LoginRequest) -> AppResult<UserAccount> {
            if request.password == "dogru" {
                Ok(UserAccount {
                    id: Uuid::new_v4(),
                    name: request.username.unwrap_or_else(|| "Panel".to_string()),
                    token: None,
                })
            } else {
                Err(AppError::Unauthorized("Yanlış şifre".to_string()))
            }
        }
    }

    fn service() -> AuthService {
        let dir = std::env::temp_dir().join(format!("fabrika-auth-{}", Uuid::new_v4()));
        let context = Arc::new(SessionContext::new(SessionStore::new(dir).unwrap()));
        AuthService::new(Arc::new(StaticAuthRepo), context)
    }

    #[test]
    fn test_operator_login_requires_name() {
        let service = service();
        assert!(service.login_operator("  ").is_err());
        assert!(service.login_operator("Mehmet").is_ok());
    }

    #[tokio::test]
    async fn test_driver_login_against_backend() {
        let service = service();
        let session = service.login_driver("ali", "dogru").await.unwrap();
        assert_eq!(session.role, Role::Driver);
        assert!(service.restore(Role::Driver).is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_is_surfaced_verbatim() {
        let service = service();
        let err = service.login_with_password(Role::Plan, "yanlis").await.unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: Yanlış şifre");
    }

    #[tokio::test]
    async fn test_operator_role_rejected_on_password_flow() {
        let service = service();
        assert!(service
            .login_with_password(Role::Operator, "x")
            .await
            .is_err());
    }
}
