use contracts::system::profile::{Profile, RawProfile, UpdateProfileRequest};

use crate::shared::api_utils::{get_json, put_json_no_content, ApiError};
use crate::system::auth::session::Session;

const PROFILE_PATH: &str = "/api/users/profile";

pub async fn fetch_profile(session: Session) -> Result<Profile, ApiError> {
    let raw: RawProfile = get_json(&session, PROFILE_PATH).await?;
    Ok(raw.into())
}

/// Saves the edited fields; the reply body is not read.
pub async fn update_profile(session: Session, request: UpdateProfileRequest) -> Result<(), ApiError> {
    put_json_no_content(&session, PROFILE_PATH, &request).await
}
