use contracts::reports::dto::{normalize_game_revenue, normalize_revenue_series};
use contracts::reports::{
    DateRange, GameRevenueRecord, RawGameRevenue, RawRevenuePoint, RawSummaryMetrics,
    RevenueRecord, SummaryMetrics,
};

use crate::shared::api_utils::{get_json_with_query, ApiError};
use crate::system::auth::session::Session;

const API_BASE: &str = "/api/admin/statistics";

/// Headline metrics for the range
pub async fn fetch_summary(session: Session, range: DateRange) -> Result<SummaryMetrics, ApiError> {
    let raw: RawSummaryMetrics =
        get_json_with_query(&session, &format!("{}/summary", API_BASE), &range.query()).await?;
    Ok(raw.normalize())
}

/// Revenue time series, one point per reported day
pub async fn fetch_revenue_series(
    session: Session,
    range: DateRange,
) -> Result<Vec<RevenueRecord>, ApiError> {
    let raw: Vec<RawRevenuePoint> =
        get_json_with_query(&session, &format!("{}/revenue", API_BASE), &range.query()).await?;
    let total = raw.len();
    let series = normalize_revenue_series(raw);
    if series.len() < total {
        log::warn!(
            "Dropped {} revenue points without a readable date",
            total - series.len()
        );
    }
    Ok(series)
}

/// Per-game revenue and units sold
pub async fn fetch_game_revenue(
    session: Session,
    range: DateRange,
) -> Result<Vec<GameRevenueRecord>, ApiError> {
    let raw: Vec<RawGameRevenue> =
        get_json_with_query(&session, &format!("{}/games", API_BASE), &range.query()).await?;
    Ok(normalize_game_revenue(raw))
}
