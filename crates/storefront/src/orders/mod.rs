//! Customer order history and checkout.

pub mod api;
pub mod ui;
