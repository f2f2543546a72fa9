use serde::{Deserialize, Serialize};

use super::auth::UserRole;

/// Account row of the admin user/publisher list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, alias = "isBlocked", alias = "blocked")]
    pub is_blocked: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl User {
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        filter.is_empty()
            || self.username.to_lowercase().contains(&filter)
            || self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&filter)
    }
}

/// Role filter of the admin list: everyone, customers only or publishers only.
pub fn filter_users(users: &[User], search: &str, role: Option<UserRole>) -> Vec<User> {
    users
        .iter()
        .filter(|u| role.map_or(true, |r| u.role == r))
        .filter(|u| u.matches_filter(search))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        serde_json::from_str(
            r#"[
                {"_id":"1","name":"An","email":"an@shop.vn","role":"customer"},
                {"_id":"2","username":"Indie Studio","role":"publisher","isBlocked":true},
                {"_id":"3","username":"root","role":"admin"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_users() {
        let users = users();
        assert!(!users[0].is_blocked);
        assert!(users[1].is_blocked);
        assert_eq!(users[1].role, UserRole::Publisher);
    }

    #[test]
    fn test_filter_users() {
        let users = users();
        assert_eq!(filter_users(&users, "", None).len(), 3);
        assert_eq!(filter_users(&users, "SHOP", None)[0].id, "1");
        let publishers = filter_users(&users, "", Some(UserRole::Publisher));
        assert_eq!(publishers.len(), 1);
        assert_eq!(publishers[0].username, "Indie Studio");
        assert!(filter_users(&users, "studio", Some(UserRole::Customer)).is_empty());
    }
}
