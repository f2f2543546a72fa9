use contracts::publisher::{CreateGameRequest, MediaUploadResponse};
use web_sys::{File, FormData};

use crate::shared::api_utils::{post_form, post_json_no_content, ApiError};
use crate::shared::config::config;
use crate::system::auth::session::Session;

/// Uploads one file to the media host and returns its public URL
pub async fn upload_media(file: File) -> Result<String, ApiError> {
    let media = &config().media;
    let form = FormData::new().map_err(|_| ApiError::Network("FormData is not available".into()))?;
    form.append_with_blob("file", &file)
        .map_err(|_| ApiError::Network(format!("Cannot attach file {}", file.name())))?;
    form.append_with_str("upload_preset", &media.upload_preset)
        .map_err(|_| ApiError::Network("Cannot attach upload preset".into()))?;

    log::debug!("Uploading {} ({} bytes)", file.name(), file.size());
    let response: MediaUploadResponse = post_form(&media.upload_url, form).await?;
    Ok(response.secure_url)
}

/// Submits the finished draft for review. The created game is not read back.
pub async fn create_game(session: Session, request: CreateGameRequest) -> Result<(), ApiError> {
    post_json_no_content(&session, "/api/games", &request).await
}
