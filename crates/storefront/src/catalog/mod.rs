//! Customer game catalog.

pub mod api;
pub mod ui;
