use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::lenient;

use super::aggregate::DEFAULT_CATEGORY;

/// Display name used when the backend row carries neither `name` nor `title`.
pub const UNKNOWN_GAME_NAME: &str = "Không xác định";

// ---------------------------------------------------------------------------
// Canonical records (what the rest of the client works with)
// ---------------------------------------------------------------------------

/// One point of the revenue time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// Revenue and units sold for one game over the active range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRevenueRecord {
    pub game_id: String,
    pub name: String,
    pub category: String,
    pub thumbnail: Option<String>,
    pub revenue: f64,
    pub sales: u64,
}

/// Revenue share of one category. Derived on the client, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub revenue: f64,
    /// Share of the total in percent, one decimal.
    pub percentage: f64,
}

/// Headline numbers of the dashboard for the active range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_revenue: f64,
    pub new_users: u64,
    pub sold_games: u64,
    pub total_orders: u64,
    /// Growth against the previous period of equal length, in percent.
    pub revenue_growth: Option<f64>,
    pub users_growth: Option<f64>,
    pub sales_growth: Option<f64>,
    pub orders_growth: Option<f64>,
}

// ---------------------------------------------------------------------------
// Raw wire shapes
//
// Several statistics routes grew independently on the backend and name the
// same fields differently. Each raw DTO accepts every known spelling and
// `normalize` picks one canonical value.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRevenuePoint {
    #[serde(default)]
    pub date: Option<String>,
    /// Aggregation pipelines group by date and return it as `_id`.
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub group_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub revenue: Option<f64>,
    #[serde(default, alias = "totalRevenue", deserialize_with = "lenient::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total: Option<f64>,
}

impl RawRevenuePoint {
    /// Points without a parseable date are dropped.
    pub fn normalize(self) -> Option<RevenueRecord> {
        let date = self
            .date
            .or(self.group_id)
            .as_deref()
            .and_then(parse_day)?;
        let revenue = self
            .revenue
            .or(self.total_revenue)
            .or(self.total)
            .unwrap_or(0.0);
        Some(RevenueRecord { date, revenue })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGameRevenue {
    #[serde(default, alias = "gameId", deserialize_with = "lenient::opt_string")]
    pub game_id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "gameName")]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default, alias = "thumbnailUrl")]
    pub thumbnail: Option<String>,
    #[serde(default, alias = "coverImage")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub revenue: Option<f64>,
    #[serde(default, alias = "totalRevenue", deserialize_with = "lenient::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub sales: Option<u64>,
    #[serde(default, alias = "soldCount", alias = "totalSold", deserialize_with = "lenient::opt_u64")]
    pub sold_count: Option<u64>,
}

impl RawGameRevenue {
    pub fn normalize(self) -> GameRevenueRecord {
        GameRevenueRecord {
            game_id: self.game_id.or(self.object_id).unwrap_or_default(),
            name: non_blank(self.name)
                .or_else(|| non_blank(self.title))
                .unwrap_or_else(|| UNKNOWN_GAME_NAME.to_string()),
            category: non_blank(self.category)
                .or_else(|| non_blank(self.genre))
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            thumbnail: non_blank(self.thumbnail).or_else(|| non_blank(self.cover_image)),
            revenue: self.revenue.or(self.total_revenue).unwrap_or(0.0),
            sales: self.sales.or(self.sold_count).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSummaryMetrics {
    #[serde(default, alias = "totalRevenue", deserialize_with = "lenient::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(default, alias = "newUsers", deserialize_with = "lenient::opt_u64")]
    pub new_users: Option<u64>,
    #[serde(default, alias = "soldGames", alias = "totalSold", deserialize_with = "lenient::opt_u64")]
    pub sold_games: Option<u64>,
    #[serde(default, alias = "totalOrders", deserialize_with = "lenient::opt_u64")]
    pub total_orders: Option<u64>,
    #[serde(default, alias = "revenueGrowth", deserialize_with = "lenient::opt_f64")]
    pub revenue_growth: Option<f64>,
    #[serde(default, alias = "usersGrowth", alias = "newUsersGrowth", deserialize_with = "lenient::opt_f64")]
    pub users_growth: Option<f64>,
    #[serde(default, alias = "salesGrowth", alias = "soldGamesGrowth", deserialize_with = "lenient::opt_f64")]
    pub sales_growth: Option<f64>,
    #[serde(default, alias = "ordersGrowth", deserialize_with = "lenient::opt_f64")]
    pub orders_growth: Option<f64>,
}

impl RawSummaryMetrics {
    pub fn normalize(self) -> SummaryMetrics {
        SummaryMetrics {
            total_revenue: self.total_revenue.unwrap_or(0.0),
            new_users: self.new_users.unwrap_or(0),
            sold_games: self.sold_games.unwrap_or(0),
            total_orders: self.total_orders.unwrap_or(0),
            revenue_growth: self.revenue_growth,
            users_growth: self.users_growth,
            sales_growth: self.sales_growth,
            orders_growth: self.orders_growth,
        }
    }
}

pub fn normalize_revenue_series(points: Vec<RawRevenuePoint>) -> Vec<RevenueRecord> {
    points.into_iter().filter_map(RawRevenuePoint::normalize).collect()
}

pub fn normalize_game_revenue(rows: Vec<RawGameRevenue>) -> Vec<GameRevenueRecord> {
    rows.into_iter().map(RawGameRevenue::normalize).collect()
}

/// Accepts `YYYY-MM-DD` as well as a full ISO timestamp; only the day is kept.
///
/// Series points are day buckets labelled by the backend, so the written day
/// is used as-is and never shifted into the viewer's zone.
pub(crate) fn parse_day(value: &str) -> Option<NaiveDate> {
    let day = value.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
