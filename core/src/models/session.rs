use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The signed-in user, handed explicitly to every operation that acts on
/// someone's behalf. Lives from login to logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub display_name: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl Session {
    pub fn employee(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            is_admin: false,
        }
    }

    pub fn admin(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            is_admin: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_without_admin_flag_deserializes_as_employee() {
        let id = UserId::new();
        let json = serde_json::json!({ "user_id": id.to_string(), "display_name": "Fatima" });
        let session: Session = serde_json::from_value(json).unwrap();
        assert_eq!(session, Session::employee(id, "Fatima"));
        assert!(!session.is_admin);
    }
}
