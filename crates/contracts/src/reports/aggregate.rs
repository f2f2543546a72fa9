//! Client-side derivations for the revenue dashboard.
//!
//! Everything here is pure and deterministic: the same input slice always
//! produces the same output, independent of time or locale.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_range::DateRange;
use super::dto::{CategoryAggregate, GameRevenueRecord, RevenueRecord};

/// Bucket for games without a category.
pub const DEFAULT_CATEGORY: &str = "Khác";

/// Length of the "top sellers" lists.
pub const TOP_SELLERS_LIMIT: usize = 5;

/// Sums revenue per category and computes each category's share.
///
/// Shares are rounded to one decimal with the largest-remainder rule, so the
/// rounded values of a non-empty input always add up to exactly 100.0. When the
/// total is zero every share is 0. Output is ordered by revenue, highest
/// first; equal revenues keep first-appearance order.
pub fn group_by_category(records: &[GameRevenueRecord]) -> Vec<CategoryAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, f64)> = Vec::new();

    for record in records {
        let key = category_key(&record.category);
        match index.get(key).copied() {
            Some(i) => groups[i].1 += record.revenue,
            None => {
                index.insert(key, groups.len());
                groups.push((key, record.revenue));
            }
        }
    }

    groups.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = groups.iter().map(|(_, revenue)| revenue).sum();
    let revenues: Vec<f64> = groups.iter().map(|(_, revenue)| *revenue).collect();
    let percentages = apportion_percentages(&revenues, total);

    groups
        .into_iter()
        .zip(percentages)
        .map(|((category, revenue), percentage)| CategoryAggregate {
            category: category.to_string(),
            revenue,
            percentage,
        })
        .collect()
}

fn category_key(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY
    } else {
        trimmed
    }
}

/// Splits 100% across `values` in tenths of a percent (largest remainder).
fn apportion_percentages(values: &[f64], total: f64) -> Vec<f64> {
    if values.is_empty() || !(total > 0.0) || !total.is_finite() {
        return vec![0.0; values.len()];
    }

    let exact: Vec<f64> = values.iter().map(|v| v / total * 1000.0).collect();
    let mut tenths: Vec<i64> = exact.iter().map(|e| e.floor() as i64).collect();
    let remaining = 1000 - tenths.iter().sum::<i64>();

    let mut by_remainder: Vec<usize> = (0..values.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });
    for &i in by_remainder.iter().take(remaining.max(0) as usize) {
        tenths[i] += 1;
    }

    tenths.into_iter().map(|t| t as f64 / 10.0).collect()
}

/// The `n` records with the most units sold. Stable: ties keep input order.
pub fn top_n_by_sales(records: &[GameRevenueRecord], n: usize) -> Vec<GameRevenueRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));
    ranked.truncate(n);
    ranked
}

pub fn top_sellers(records: &[GameRevenueRecord]) -> Vec<GameRevenueRecord> {
    top_n_by_sales(records, TOP_SELLERS_LIMIT)
}

pub fn total_revenue(records: &[GameRevenueRecord]) -> f64 {
    records.iter().map(|r| r.revenue).sum()
}

// ---------------------------------------------------------------------------
// Revenue series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeriesSummary {
    pub total: f64,
    /// Mean revenue per point; 0 for an empty series.
    pub average: f64,
    /// Best day; the earliest one wins a tie.
    pub peak: Option<RevenueRecord>,
}

pub fn summarize_series(series: &[RevenueRecord]) -> RevenueSeriesSummary {
    let total: f64 = series.iter().map(|p| p.revenue).sum();
    let average = if series.is_empty() {
        0.0
    } else {
        total / series.len() as f64
    };
    let peak = series
        .iter()
        .fold(None::<&RevenueRecord>, |best, point| match best {
            Some(b) if b.revenue >= point.revenue => Some(b),
            _ => Some(point),
        })
        .cloned();

    RevenueSeriesSummary {
        total,
        average,
        peak,
    }
}

/// One point per day of `range`, ascending. Days the backend omitted get 0,
/// duplicate days are summed and points outside the range are dropped.
pub fn fill_daily_gaps(series: &[RevenueRecord], range: &DateRange) -> Vec<RevenueRecord> {
    let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();
    for point in series.iter().filter(|p| range.contains(p.date)) {
        *by_day.entry(point.date).or_insert(0.0) += point.revenue;
    }

    range
        .iter_days()
        .map(|date| RevenueRecord {
            date,
            revenue: by_day.get(&date).copied().unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, category: &str, revenue: f64, sales: u64) -> GameRevenueRecord {
        GameRevenueRecord {
            game_id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            thumbnail: None,
            revenue,
            sales,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn percentage_sum(groups: &[CategoryAggregate]) -> f64 {
        groups.iter().map(|g| g.percentage).sum()
    }

    #[test]
    fn test_group_by_category() {
        let records = vec![
            game("A", "Action", 300.0, 3),
            game("B", "RPG", 500.0, 1),
            game("C", "Action", 200.0, 2),
            game("D", "", 0.0, 0),
        ];
        let groups = group_by_category(&records);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].category, "Action");
        assert_eq!(groups[0].revenue, 500.0);
        assert_eq!(groups[0].percentage, 50.0);
        assert_eq!(groups[1].category, "RPG");
        assert_eq!(groups[1].percentage, 50.0);
        assert_eq!(groups[2].category, DEFAULT_CATEGORY);
        assert_eq!(groups[2].percentage, 0.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let thirds = vec![
            game("A", "x", 1.0, 0),
            game("B", "y", 1.0, 0),
            game("C", "z", 1.0, 0),
        ];
        let groups = group_by_category(&thirds);
        assert!((percentage_sum(&groups) - 100.0).abs() <= 0.1);
        assert_eq!(groups[0].percentage, 33.4);
        assert_eq!(groups[1].percentage, 33.3);

        let sevenths: Vec<_> = (0..7)
            .map(|i| game(&format!("G{}", i), &format!("c{}", i), 1.0, 0))
            .collect();
        assert!((percentage_sum(&group_by_category(&sevenths)) - 100.0).abs() <= 0.1);

        let uneven = vec![
            game("A", "a", 123.45, 0),
            game("B", "b", 0.01, 0),
            game("C", "c", 9876.0, 0),
            game("D", "d", 42.0, 0),
        ];
        let groups = group_by_category(&uneven);
        assert!((percentage_sum(&groups) - 100.0).abs() <= 0.1);
        for g in &groups {
            let exact = g.revenue / total_revenue(&uneven) * 100.0;
            assert!((g.percentage - exact).abs() < 0.1);
        }
    }

    #[test]
    fn test_zero_total_yields_zero_percentages() {
        let records = vec![game("A", "Action", 0.0, 4), game("B", "RPG", 0.0, 1)];
        let groups = group_by_category(&records);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.percentage == 0.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(&[]).is_empty());
        assert!(top_n_by_sales(&[], 5).is_empty());
        assert!(top_sellers(&[]).is_empty());
        assert_eq!(total_revenue(&[]), 0.0);
    }

    #[test]
    fn test_top_n_by_sales() {
        let records = vec![
            game("A", "x", 0.0, 10),
            game("B", "x", 0.0, 30),
            game("C", "x", 0.0, 20),
        ];
        let top: Vec<u64> = top_n_by_sales(&records, 2).iter().map(|r| r.sales).collect();
        assert_eq!(top, vec![30, 20]);
        // input untouched
        assert_eq!(records[0].sales, 10);
    }

    #[test]
    fn test_top_n_is_stable_and_limited() {
        let records: Vec<_> = (0..8)
            .map(|i| game(&format!("G{}", i), "x", 0.0, if i % 2 == 0 { 5 } else { 1 }))
            .collect();
        let top = top_sellers(&records);
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["G0", "G2", "G4", "G6", "G1"]);
    }

    #[test]
    fn test_summarize_series() {
        let series = vec![
            RevenueRecord { date: day(1), revenue: 100.0 },
            RevenueRecord { date: day(2), revenue: 300.0 },
            RevenueRecord { date: day(3), revenue: 300.0 },
        ];
        let summary = summarize_series(&series);
        assert_eq!(summary.total, 700.0);
        assert!((summary.average - 700.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.peak.unwrap().date, day(2));

        assert_eq!(summarize_series(&[]), RevenueSeriesSummary::default());
    }

    #[test]
    fn test_fill_daily_gaps() {
        let range = DateRange::custom(day(1), day(4)).unwrap();
        let series = vec![
            RevenueRecord { date: day(2), revenue: 50.0 },
            RevenueRecord { date: day(2), revenue: 25.0 },
            RevenueRecord { date: day(9), revenue: 1.0 },
        ];
        let filled = fill_daily_gaps(&series, &range);
        let values: Vec<f64> = filled.iter().map(|p| p.revenue).collect();
        assert_eq!(values, vec![0.0, 75.0, 0.0, 0.0]);
        assert_eq!(filled[0].date, day(1));
        assert_eq!(filled[3].date, day(4));
    }
}
