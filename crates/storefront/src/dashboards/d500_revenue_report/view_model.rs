//! Display rows of the report widgets, built from aggregated records.

use chrono::NaiveDate;
use contracts::reports::{
    fill_daily_gaps, summarize_series, CategoryAggregate, DateRange, GameRevenueRecord,
    RevenueRecord, SummaryMetrics,
};

use crate::shared::format::{
    format_count, format_day_month, format_naive_date, format_percent, format_units, format_vnd,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCardModel {
    pub label: &'static str,
    pub value: String,
    pub growth: Option<f64>,
}

pub fn summary_cards(metrics: &SummaryMetrics) -> Vec<SummaryCardModel> {
    vec![
        SummaryCardModel {
            label: "Tổng doanh thu",
            value: format_vnd(Some(metrics.total_revenue)),
            growth: metrics.revenue_growth,
        },
        SummaryCardModel {
            label: "Người dùng mới",
            value: format_count(Some(metrics.new_users as f64)),
            growth: metrics.users_growth,
        },
        SummaryCardModel {
            label: "Game đã bán",
            value: format_count(Some(metrics.sold_games as f64)),
            growth: metrics.sales_growth,
        },
        SummaryCardModel {
            label: "Tổng đơn hàng",
            value: format_count(Some(metrics.total_orders as f64)),
            growth: metrics.orders_growth,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendBar {
    pub date: NaiveDate,
    pub axis_label: String,
    pub tooltip: String,
    /// Bar height relative to the best day, 0..=100.
    pub height_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendModel {
    pub bars: Vec<TrendBar>,
    pub total: String,
    pub average: String,
    pub peak: Option<String>,
}

pub fn revenue_trend(series: &[RevenueRecord], range: &DateRange) -> TrendModel {
    let daily = fill_daily_gaps(series, range);
    let summary = summarize_series(&daily);
    let max = daily.iter().map(|p| p.revenue).fold(0.0_f64, f64::max);

    let bars = daily
        .iter()
        .map(|point| TrendBar {
            date: point.date,
            axis_label: format_day_month(point.date),
            tooltip: format!(
                "{}: {}",
                format_naive_date(point.date),
                format_vnd(Some(point.revenue))
            ),
            height_pct: if max > 0.0 {
                (point.revenue.max(0.0) / max * 100.0).min(100.0)
            } else {
                0.0
            },
        })
        .collect();

    TrendModel {
        bars,
        total: format_vnd(Some(summary.total)),
        average: format_vnd(Some(summary.average)),
        peak: summary
            .peak
            .filter(|p| p.revenue > 0.0)
            .map(|p| format!("{} ({})", format_vnd(Some(p.revenue)), format_naive_date(p.date))),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub revenue: String,
    pub percentage: String,
    /// Width of the share bar, 0..=100.
    pub share: f64,
}

pub fn category_rows(aggregates: &[CategoryAggregate]) -> Vec<CategoryRow> {
    aggregates
        .iter()
        .map(|a| CategoryRow {
            category: a.category.clone(),
            revenue: format_vnd(Some(a.revenue)),
            percentage: format_percent(Some(a.percentage)),
            share: a.percentage.clamp(0.0, 100.0),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub rank: usize,
    pub game_id: String,
    pub name: String,
    pub category: String,
    pub thumbnail: Option<String>,
    pub sales: String,
    pub revenue: String,
}

/// Rows numbered from 1 in the given order.
pub fn game_rows(records: &[GameRevenueRecord]) -> Vec<GameRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| GameRow {
            rank: i + 1,
            game_id: r.game_id.clone(),
            name: r.name.clone(),
            category: r.category.clone(),
            thumbnail: r.thumbnail.clone(),
            sales: format_units(r.sales),
            revenue: format_vnd(Some(r.revenue)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reports::{group_by_category, top_sellers};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn game(id: &str, category: &str, revenue: f64, sales: u64) -> GameRevenueRecord {
        GameRevenueRecord {
            game_id: id.to_string(),
            name: format!("Game {}", id),
            category: category.to_string(),
            thumbnail: None,
            revenue,
            sales,
        }
    }

    #[test]
    fn test_summary_cards() {
        let metrics = SummaryMetrics {
            total_revenue: 1234567.0,
            new_users: 1200,
            revenue_growth: Some(12.5),
            ..SummaryMetrics::default()
        };
        let cards = summary_cards(&metrics);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "1.234.567\u{a0}₫");
        assert_eq!(cards[0].growth, Some(12.5));
        assert_eq!(cards[1].value, "1.200");
        assert_eq!(cards[3].value, "0");
    }

    #[test]
    fn test_trend_fills_missing_days() {
        let range = DateRange::custom(day(1), day(4)).unwrap();
        let series = vec![
            RevenueRecord { date: day(2), revenue: 200.0 },
            RevenueRecord { date: day(4), revenue: 100.0 },
        ];
        let trend = revenue_trend(&series, &range);

        assert_eq!(trend.bars.len(), 4);
        assert_eq!(trend.bars[0].height_pct, 0.0);
        assert_eq!(trend.bars[1].height_pct, 100.0);
        assert_eq!(trend.bars[3].height_pct, 50.0);
        assert_eq!(trend.bars[1].axis_label, "02/01");
        assert_eq!(trend.total, "300\u{a0}₫");
        assert_eq!(trend.average, "75\u{a0}₫");
        assert_eq!(trend.peak, Some("200\u{a0}₫ (2/1/2024)".to_string()));
    }

    #[test]
    fn test_trend_of_empty_series() {
        let range = DateRange::custom(day(1), day(2)).unwrap();
        let trend = revenue_trend(&[], &range);
        assert!(trend.bars.iter().all(|b| b.height_pct == 0.0));
        assert_eq!(trend.peak, None);
    }

    #[test]
    fn test_category_rows() {
        let records = vec![game("1", "RPG", 300.0, 1), game("2", "Indie", 100.0, 4)];
        let rows = category_rows(&group_by_category(&records));
        assert_eq!(rows[0].category, "RPG");
        assert_eq!(rows[0].percentage, "75%");
        assert_eq!(rows[1].share, 25.0);
    }

    #[test]
    fn test_game_rows_are_ranked() {
        let records = vec![game("1", "RPG", 300.0, 1), game("2", "Indie", 100.0, 4)];
        let rows = game_rows(&top_sellers(&records));
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].game_id, "2");
        assert_eq!(rows[0].sales, "4");
        assert_eq!(rows[1].revenue, "300\u{a0}₫");
    }
}
