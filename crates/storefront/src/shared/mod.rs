pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod format;
pub mod local_storage;
pub mod remote_data;
pub mod request_state;
