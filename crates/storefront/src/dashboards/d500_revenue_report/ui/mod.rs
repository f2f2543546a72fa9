pub mod category_breakdown;
pub mod dashboard;
pub mod games_table;
pub mod revenue_trend;
pub mod summary_cards;
pub mod top_sellers;

pub use dashboard::RevenueReportDashboard;
