//! Admin revenue reporting: the records served by the statistics endpoints
//! and the client-side derivations built on top of them.

pub mod aggregate;
pub mod date_range;
pub mod dto;
pub mod filter;

pub use aggregate::{
    fill_daily_gaps, group_by_category, summarize_series, top_n_by_sales, top_sellers,
    total_revenue, RevenueSeriesSummary, DEFAULT_CATEGORY, TOP_SELLERS_LIMIT,
};
pub use date_range::{DateRange, DateRangeDraft, DateRangeError, DateRangePreset, DateRangeQuery};
pub use dto::{
    CategoryAggregate, GameRevenueRecord, RawGameRevenue, RawRevenuePoint, RawSummaryMetrics,
    RevenueRecord, SummaryMetrics,
};
pub use filter::{GameListQuery, SortMode, ALL_CATEGORIES};
