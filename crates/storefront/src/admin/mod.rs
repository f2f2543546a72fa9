//! Admin console: game review queue, account blocking and dispute monitoring.

pub mod api;
pub mod ui;
