use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

/// Browser storage area: `localStorage` survives closing the tab,
/// `sessionStorage` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    fn name(&self) -> &'static str {
        match self {
            StorageArea::Local => "localStorage",
            StorageArea::Session => "sessionStorage",
        }
    }
}

fn get_storage(area: StorageArea) -> Option<web_sys::Storage> {
    let window = window()?;
    match area {
        StorageArea::Local => window.local_storage().ok()?,
        StorageArea::Session => window.session_storage().ok()?,
    }
}

pub fn get_item_in(area: StorageArea, key: &str) -> Option<String> {
    get_storage(area)?.get_item(key).ok()?
}

pub fn set_item_in(area: StorageArea, key: &str, value: &str) {
    if let Some(storage) = get_storage(area) {
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to write '{}' to {}", key, area.name());
        }
    }
}

pub fn remove_item_in(area: StorageArea, key: &str) {
    if let Some(storage) = get_storage(area) {
        let _ = storage.remove_item(key);
    }
}

/// Reads a JSON value. Unreadable entries are removed so they do not fail
/// again on every load.
pub fn get_json_in<T: DeserializeOwned>(area: StorageArea, key: &str) -> Option<T> {
    let raw = get_item_in(area, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unreadable '{}' from {}: {}", key, area.name(), e);
            remove_item_in(area, key);
            None
        }
    }
}

pub fn set_json_in<T: Serialize>(area: StorageArea, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set_item_in(area, key, &raw),
        Err(e) => log::error!("Failed to serialize '{}': {}", key, e),
    }
}

pub fn get_item(key: &str) -> Option<String> {
    get_item_in(StorageArea::Local, key)
}

pub fn set_item(key: &str, value: &str) {
    set_item_in(StorageArea::Local, key, value)
}

pub fn remove_item(key: &str) {
    remove_item_in(StorageArea::Local, key)
}

pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    get_json_in(StorageArea::Local, key)
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    set_json_in(StorageArea::Local, key, value)
}
