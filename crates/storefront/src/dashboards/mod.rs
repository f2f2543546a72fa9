pub mod d500_revenue_report;

pub use d500_revenue_report::ui::RevenueReportDashboard;
