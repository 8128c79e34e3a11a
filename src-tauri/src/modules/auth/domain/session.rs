use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

/// Roles the client gates pages behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Operator,
    Driver,
    Plan,
    Management,
    Warehouse,
    Paint,
}

impl Role {
    /// Fixed per-role key the session blob persists under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Role::Operator => "operator_session",
            Role::Driver => "driver_session",
            Role::Plan => "plan_session",
            Role::Management => "management_session",
            Role::Warehouse => "warehouse_session",
            Role::Paint => "paint_session",
        }
    }

    /// Role name as the backend knows it.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Role::Operator => "operator",
            Role::Driver => "sofor",
            Role::Plan => "plan",
            Role::Management => "yonetim",
            Role::Warehouse => "depo",
            Role::Paint => "boya",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Operator => write!(f, "operator"),
            Role::Driver => write!(f, "driver"),
            Role::Plan => write!(f, "plan"),
            Role::Management => write!(f, "management"),
            Role::Warehouse => write!(f, "warehouse"),
            Role::Paint => write!(f, "paint"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operator" => Ok(Role::Operator),
            "driver" => Ok(Role::Driver),
            "plan" => Ok(Role::Plan),
            "management" => Ok(Role::Management),
            "warehouse" => Ok(Role::Warehouse),
            "paint" => Ok(Role::Paint),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// An authenticated session for one role.
///
/// Persisted as a JSON blob under [`Role::storage_key`]; a valid blob skips
/// the login screen on the next launch.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
    pub display_name: String,
    /// Opaque token the backend may hand out on login.
    pub token: Option<String>,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub const TTL_HOURS: i64 = 12;

    pub fn new(user_id: Uuid, role: Role, display_name: String, token: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            role,
            display_name,
            token,
            started_at: now,
            expires_at: now + Duration::hours(Self::TTL_HOURS),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Extend the session by another TTL window from now.
    pub fn refreshed(&self) -> Self {
        Self {
            expires_at: Utc::now() + Duration::hours(Self::TTL_HOURS),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_storage_keys_match_local_storage_names() {
        assert_eq!(Role::Operator.storage_key(), "operator_session");
        assert_eq!(Role::Driver.storage_key(), "driver_session");
        assert_eq!(Role::Plan.storage_key(), "plan_session");
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            Role::Operator,
            Role::Driver,
            Role::Plan,
            Role::Management,
            Role::Warehouse,
            Role::Paint,
        ] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_new_session_is_not_expired() {
        let session = Session::new(Uuid::new_v4(), Role::Operator, "Mehmet".to_string(), None);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_refreshed_extends_expiry() {
        let session = Session::new(Uuid::new_v4(), Role::Driver, "Ali".to_string(), None);
        let refreshed = session.refreshed();
        assert!(refreshed.expires_at >= session.expires_at);
        assert_eq!(refreshed.user_id, session.user_id);
    }
}
