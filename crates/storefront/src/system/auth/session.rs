use contracts::system::auth::{LoginResponse, UserInfo};

/// A signed-in user together with the token that authenticates their
/// requests. Every API wrapper takes one of these explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            access_token: access_token.into(),
            user,
        }
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }

    pub fn is_publisher(&self) -> bool {
        self.user.is_publisher()
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.access_token, response.user)
    }
}

/// Where the app stands with respect to authentication.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Set when the backend rejected the stored token.
    pub expired: bool,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            expired: false,
        }
    }

    pub fn expired() -> Self {
        Self {
            session: None,
            expired: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().map(Session::is_admin).unwrap_or(false)
    }

    pub fn is_publisher(&self) -> bool {
        self.session
            .as_ref()
            .map(Session::is_publisher)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserRole;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            username: "lan".to_string(),
            email: None,
            role,
            avatar: None,
        }
    }

    #[test]
    fn test_bearer_header() {
        let session = Session::new("abc", user(UserRole::Customer));
        assert_eq!(session.bearer(), "Bearer abc");
    }

    #[test]
    fn test_state_roles() {
        assert!(!AuthState::default().is_authenticated());
        assert!(AuthState::expired().expired);

        let admin = AuthState::signed_in(Session::new("t", user(UserRole::Admin)));
        assert!(admin.is_authenticated());
        assert!(admin.is_admin());
        assert!(!admin.is_publisher());

        let publisher = AuthState::signed_in(Session::new("t", user(UserRole::Publisher)));
        assert!(publisher.is_publisher());
        assert!(!publisher.is_admin());
    }

    #[test]
    fn test_session_from_login_response() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"accessToken":"jwt","user":{"_id":"u2","name":"Minh","role":"admin"}}"#,
        )
        .unwrap();
        let session = Session::from(response);
        assert_eq!(session.access_token, "jwt");
        assert!(session.is_admin());
    }
}
