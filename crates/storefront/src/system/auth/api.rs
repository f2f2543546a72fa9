use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use super::session::Session;
use crate::shared::api_utils::{get_json, post_json_anonymous, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json_anonymous("/api/auth/login", &request).await
}

/// Get current user info, validating the token at the same time
pub async fn get_current_user(session: &Session) -> Result<UserInfo, ApiError> {
    get_json(session, "/api/auth/me").await
}
