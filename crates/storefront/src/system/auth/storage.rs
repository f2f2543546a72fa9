use contracts::system::auth::UserInfo;

use super::session::Session;
use crate::shared::local_storage::{self, StorageArea};

const ACCESS_TOKEN_KEY: &str = "accessToken";
const USER_KEY: &str = "user";

/// Persist the session. Remembered sessions go to localStorage and survive
/// closing the browser; the others live in sessionStorage for this tab only.
pub fn save_session(session: &Session, remember: bool) {
    clear_session();
    let area = if remember {
        StorageArea::Local
    } else {
        StorageArea::Session
    };
    local_storage::set_item_in(area, ACCESS_TOKEN_KEY, &session.access_token);
    local_storage::set_json_in(area, USER_KEY, &session.user);
}

/// Area holding the current token; localStorage wins if both have one
fn token_area() -> Option<StorageArea> {
    [StorageArea::Local, StorageArea::Session]
        .into_iter()
        .find(|area| {
            local_storage::get_item_in(*area, ACCESS_TOKEN_KEY)
                .is_some_and(|t| !t.trim().is_empty())
        })
}

/// Session stored by a previous visit, if both parts are present
pub fn load_session() -> Option<Session> {
    let area = token_area()?;
    let token = local_storage::get_item_in(area, ACCESS_TOKEN_KEY)?;
    let user = local_storage::get_json_in::<UserInfo>(area, USER_KEY)?;
    Some(Session::new(token, user))
}

/// Replace the stored user record, keeping the token where it is
pub fn update_user(user: &UserInfo) {
    if let Some(area) = token_area() {
        local_storage::set_json_in(area, USER_KEY, user);
    }
}

/// Clear all authentication data
pub fn clear_session() {
    for area in [StorageArea::Local, StorageArea::Session] {
        local_storage::remove_item_in(area, ACCESS_TOKEN_KEY);
        local_storage::remove_item_in(area, USER_KEY);
    }
}
