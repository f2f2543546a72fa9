pub mod dispute_monitor;
pub mod game_approval;
pub mod user_list;

pub use dispute_monitor::DisputeMonitor;
pub use game_approval::GameApprovalList;
pub use user_list::UserList;
