//! JSON-blob session persistence.
//!
//! One file per role inside the app data directory, named after the role's
//! storage key. Corrupt blobs are discarded rather than propagated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::log_warn;
use crate::modules::auth::domain::session::{Role, Session};
use crate::shared::errors::AppResult;

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, role: Role) -> PathBuf {
        self.dir.join(format!("{}.json", role.storage_key()))
    }

    pub fn save(&self, session: &Session) -> AppResult<()> {
        let path = self.path_for(session.role);
        let blob = serde_json::to_string_pretty(session)?;
        fs::write(path, blob)?;
        Ok(())
    }

    pub fn load(&self, role: Role) -> Option<Session> {
        let path = self.path_for(role);
        let blob = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<Session>(&blob) {
            Ok(session) => Some(session),
            Err(e) => {
                log_warn!("Discarding corrupt {} blob: {}", role.storage_key(), e);
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    pub fn delete(&self, role: Role) -> AppResult<()> {
        let path = self.path_for(role);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> SessionStore {
        let dir = std::env::temp_dir().join(format!("fabrika-sessions-{}", Uuid::new_v4()));
        SessionStore::new(dir).unwrap()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store();
        let session = Session::new(Uuid::new_v4(), Role::Plan, "Planlama".to_string(), None);

        store.save(&session).unwrap();
        let loaded = store.load(Role::Plan).unwrap();
        assert_eq!(loaded.user_id, session.user_id);
        assert_eq!(loaded.display_name, "Planlama");
    }

    #[test]
    fn test_load_missing_role_returns_none() {
        let store = temp_store();
        assert!(store.load(Role::Driver).is_none());
    }

    #[test]
    fn test_corrupt_blob_is_discarded() {
        let store = temp_store();
        let path = store.path_for(Role::Operator);
        fs::write(&path, "{not-json").unwrap();

        assert!(store.load(Role::Operator).is_none());
        assert!(!path.exists(), "corrupt blob should be deleted");
    }

    #[test]
    fn test_delete_removes_blob() {
        let store = temp_store();
        let session = Session::new(Uuid::new_v4(), Role::Driver, "Ali".to_string(), None);
        store.save(&session).unwrap();

        store.delete(Role::Driver).unwrap();
        assert!(store.load(Role::Driver).is_none());
    }
}
