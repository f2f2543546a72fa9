//! Shopping cart and checkout.

pub mod context;
pub mod ui;
