pub mod catalog;
pub mod disputes;
pub mod orders;
pub mod publisher;
pub mod reports;
pub mod shared;
pub mod system;
