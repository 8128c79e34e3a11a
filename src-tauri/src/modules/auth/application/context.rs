//! Explicit session context.
//!
//! Controllers receive this handle at construction instead of reading an
//! ambient global: the current actor's identity and scope are available
//! everywhere without re-authentication, with a defined expiry/refresh
//! contract.

use dashmap::DashMap;

use crate::modules::auth::domain::session::{Role, Session};
use crate::modules::auth::infrastructure::session_store::SessionStore;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

pub struct SessionContext {
    sessions: DashMap<Role, Session>,
    store: SessionStore,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self {
            sessions: DashMap::new(),
            store,
        }
    }

    /// Load every persisted blob; expired ones are dropped on the spot.
    pub fn restore_persisted(&self) {
        for role in [
            Role::Operator,
            Role::Driver,
            Role::Plan,
            Role::Management,
            Role::Warehouse,
            Role::Paint,
        ] {
            if let Some(session) = self.store.load(role) {
                if session.is_expired() {
                    log_debug!("Persisted {} session expired, discarding", role);
                    let _ = self.store.delete(role);
                } else {
                    log_info!("Restored {} session for '{}'", role, session.display_name);
                    self.sessions.insert(role, session);
                }
            }
        }
    }

    /// Install a freshly authenticated session and persist it.
    pub fn establish(&self, session: Session) -> AppResult<Session> {
        self.store.save(&session)?;
        self.sessions.insert(session.role, session.clone());
        Ok(session)
    }

    /// Current session for `role`; an expired one is cleared and reported.
    pub fn current(&self, role: Role) -> AppResult<Session> {
        let session = self
            .sessions
            .get(&role)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::Session(format!("No active {} session", role)))?;

        if session.is_expired() {
            self.clear(role)?;
            return Err(AppError::Session(format!("The {} session has expired", role)));
        }
        Ok(session)
    }

    /// Extend the session's expiry by another TTL window and persist it.
    pub fn refresh(&self, role: Role) -> AppResult<Session> {
        let refreshed = self.current(role)?.refreshed();
        self.store.save(&refreshed)?;
        self.sessions.insert(role, refreshed.clone());
        Ok(refreshed)
    }

    pub fn clear(&self, role: Role) -> AppResult<()> {
        self.sessions.remove(&role);
        self.store.delete(role)
    }

    pub fn peek(&self, role: Role) -> Option<Session> {
        self.sessions.get(&role).map(|entry| entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn context() -> SessionContext {
        let dir = std::env::temp_dir().join(format!("fabrika-ctx-{}", Uuid::new_v4()));
        SessionContext::new(SessionStore::new(dir).unwrap())
    }

    #[test]
    fn test_establish_then_current() {
        let ctx = context();
        let session = Session::new(Uuid::new_v4(), Role::Operator, "Mehmet".to_string(), None);
        ctx.establish(session.clone()).unwrap();

        let current = ctx.current(Role::Operator).unwrap();
        assert_eq!(current.user_id, session.user_id);
    }

    #[test]
    fn test_current_without_login_fails() {
        let ctx = context();
        assert!(matches!(ctx.current(Role::Plan), Err(AppError::Session(_))));
    }

    #[test]
    fn test_expired_session_is_cleared() {
        let ctx = context();
        let mut session = Session::new(Uuid::new_v4(), Role::Driver, "Ali".to_string(), None);
        session.expires_at = Utc::now() - Duration::minutes(1);
        ctx.establish(session).unwrap();

        assert!(matches!(ctx.current(Role::Driver), Err(AppError::Session(_))));
        assert!(ctx.peek(Role::Driver).is_none());
    }

    #[test]
    fn test_refresh_extends_expiry() {
        let ctx = context();
        let session = Session::new(Uuid::new_v4(), Role::Warehouse, "Depo".to_string(), None);
        let before = session.expires_at;
        ctx.establish(session).unwrap();

        let refreshed = ctx.refresh(Role::Warehouse).unwrap();
        assert!(refreshed.expires_at >= before);
    }
}
