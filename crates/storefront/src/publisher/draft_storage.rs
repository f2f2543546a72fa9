use contracts::publisher::UploadDraft;

use crate::shared::local_storage;

const DRAFT_KEY: &str = "publisherUploadDraft";

/// Draft left by a previous visit, or a fresh one
pub fn load_or_new() -> UploadDraft {
    match local_storage::get_json::<UploadDraft>(DRAFT_KEY) {
        Some(draft) => {
            log::debug!("Resuming upload draft {}", draft.draft_id);
            draft
        }
        None => UploadDraft::new(),
    }
}

pub fn save(draft: &UploadDraft) {
    local_storage::set_json(DRAFT_KEY, draft);
}

pub fn clear() {
    local_storage::remove_item(DRAFT_KEY);
}
