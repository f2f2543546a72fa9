//! The signed-in user's own profile.

pub mod api;
pub mod ui;
