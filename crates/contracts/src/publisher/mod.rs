//! Publisher game upload wizard.

pub mod upload_draft;

pub use upload_draft::{
    CreateGameRequest, DraftError, MediaUploadResponse, UploadDraft, WizardStep, MAX_SCREENSHOTS,
};
