//! Publisher game upload wizard.

pub mod api;
pub mod draft_storage;
pub mod ui;
