use contracts::catalog::{GameStatus, GameSummary, UpdateGameStatusRequest};
use contracts::disputes::Dispute;
use contracts::system::users::User;
use serde::Serialize;

use crate::shared::api_utils::{
    get_json, get_json_with_query, patch_json, path_segment, ApiError,
};
use crate::system::auth::session::Session;

#[derive(Serialize)]
struct StatusFilter {
    status: &'static str,
}

/// Games waiting for review
pub async fn fetch_pending_games(session: Session) -> Result<Vec<GameSummary>, ApiError> {
    let filter = StatusFilter {
        status: GameStatus::Pending.code(),
    };
    get_json_with_query(&session, "/api/admin/games", &filter).await
}

/// Approve or reject a game
pub async fn update_game_status(
    session: Session,
    game_id: String,
    status: GameStatus,
    reason: Option<String>,
) -> Result<(), ApiError> {
    let body = UpdateGameStatusRequest {
        status,
        reason: reason.filter(|r| !r.trim().is_empty()),
    };
    let path = format!("/api/admin/games/{}/status", path_segment(&game_id));
    patch_json(&session, &path, Some(&body)).await
}

/// All customer and publisher accounts
pub async fn fetch_users(session: Session) -> Result<Vec<User>, ApiError> {
    get_json(&session, "/api/admin/users").await
}

/// Block or unblock an account
pub async fn set_user_blocked(session: Session, user_id: String, blocked: bool) -> Result<(), ApiError> {
    let action = if blocked { "block" } else { "unblock" };
    let path = format!("/api/admin/users/{}/{}", path_segment(&user_id), action);
    patch_json::<()>(&session, &path, None).await
}

/// Order disputes, read-only
pub async fn fetch_disputes(session: Session) -> Result<Vec<Dispute>, ApiError> {
    get_json(&session, "/api/admin/disputes").await
}
