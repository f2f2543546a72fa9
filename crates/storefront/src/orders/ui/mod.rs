pub mod history;

pub use history::OrderHistory;
