use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "token")]
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Publisher,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Customer
    }
}

impl UserRole {
    /// Roles an admin can filter by, in display order.
    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Customer, UserRole::Publisher, UserRole::Admin]
    }

    /// Wire code, identical to the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Publisher => "publisher",
            UserRole::Admin => "admin",
            UserRole::Unknown => "unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|role| role.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Customer => "Khách hàng",
            UserRole::Publisher => "Nhà phát hành",
            UserRole::Admin => "Quản trị viên",
            UserRole::Unknown => "Không rõ",
        }
    }
}

/// The signed-in user, as returned by login and `/api/auth/me` and kept in
/// local storage between reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_publisher(&self) -> bool {
        self.role == UserRole::Publisher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_aliases() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"accessToken":"abc","user":{"_id":"u1","name":"Lan","role":"admin"}}"#,
        )
        .unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.user.id, "u1");
        assert!(response.user.is_admin());
    }

    #[test]
    fn test_user_round_trips_through_storage_format() {
        let user = UserInfo {
            id: "u2".to_string(),
            username: "minh".to_string(),
            email: Some("minh@example.com".to_string()),
            role: UserRole::Publisher,
            avatar: None,
        };
        let stored = serde_json::to_string(&user).unwrap();
        let restored: UserInfo = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, user);
        assert!(restored.is_publisher());
    }

    #[test]
    fn test_role_codes_match_wire_format() {
        for role in UserRole::all() {
            let wire = serde_json::to_string(&role).unwrap();
            assert_eq!(wire, format!("\"{}\"", role.code()));
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("all"), None);
        assert_eq!(UserRole::from_code("unknown"), None);
    }

    #[test]
    fn test_unknown_role() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"u3","username":"x","role":"moderator"}"#).unwrap();
        assert_eq!(user.role, UserRole::Unknown);
        assert!(!user.is_admin());
    }
}
