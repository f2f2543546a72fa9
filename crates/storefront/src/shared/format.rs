//! Display formatting, Vietnamese conventions (vi-VN)
//!
//! Every function accepts missing or malformed input and falls back to a
//! neutral placeholder instead of failing.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::shared::date_utils::local_offset;

pub const CURRENCY_SYMBOL: &str = "₫";
pub const NOT_AVAILABLE: &str = "N/A";

const NBSP: char = '\u{00a0}';

/// Inserts `.` every three digits: 1234567 -> "1.234.567"
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Decimal with comma separator and at most one fractional digit:
/// 12.5 -> "12,5", 100.0 -> "100"
fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        group_thousands(rounded as i64)
    } else {
        let sign = if rounded < 0.0 { "-" } else { "" };
        let abs = rounded.abs();
        let tenths = ((abs.fract() * 10.0).round() as i64).clamp(0, 9);
        format!("{}{},{}", sign, group_thousands(abs.trunc() as i64), tenths)
    }
}

/// 1234567 -> "1.234.567 ₫" (non-breaking space). Missing -> "0 ₫".
pub fn format_vnd(value: Option<f64>) -> String {
    let amount = finite(value).map(|v| v.round() as i64).unwrap_or(0);
    format!("{}{}{}", group_thousands(amount), NBSP, CURRENCY_SYMBOL)
}

/// Integer count with grouping. Missing -> "0".
pub fn format_count(value: Option<f64>) -> String {
    finite(value)
        .map(|v| group_thousands(v.round() as i64))
        .unwrap_or_else(|| "0".to_string())
}

pub fn format_units(value: u64) -> String {
    group_thousands(value.min(i64::MAX as u64) as i64)
}

/// 12.5 -> "12,5%". Missing -> "0%".
pub fn format_percent(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => format!("{}%", one_decimal(v)),
        None => "0%".to_string(),
    }
}

/// Signed change against the previous period: "+12,5%", "-3%", "0%".
/// `None` when the backend sent no comparison.
pub fn format_growth(value: Option<f64>) -> Option<String> {
    let v = finite(value)?;
    let text = one_decimal(v);
    if text == "0" || text == "-0" {
        Some("0%".to_string())
    } else if v > 0.0 {
        Some(format!("+{}%", text))
    } else {
        Some(format!("{}%", text))
    }
}

/// Axis labels for charts: 1_250_000 -> "1,3 tr", 2_000_000_000 -> "2 tỷ"
pub fn format_compact_vnd(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{} tỷ", one_decimal(value / 1_000_000_000.0))
    } else if abs >= 1_000_000.0 {
        format!("{} tr", one_decimal(value / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}k", one_decimal(value / 1_000.0))
    } else {
        group_thousands(value.round() as i64)
    }
}

/// Calendar day of a backend date as seen in `zone`. Timestamps carrying an
/// offset are shifted into `zone`; bare dates are taken as written.
fn parse_date_in(value: &str, zone: FixedOffset) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&zone).date_naive());
    }
    value
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Day/month/year without zero padding: 2024-01-05 -> "5/1/2024"
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// "2024-01-05T00:00:00Z" -> "5/1/2024" in the viewer's zone.
/// Unparseable -> "N/A".
pub fn format_date(value: &str) -> String {
    format_date_in(value, local_offset())
}

pub fn format_date_in(value: &str, zone: FixedOffset) -> String {
    parse_date_in(value, zone)
        .map(format_naive_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_date_opt(value: Option<&str>) -> String {
    value.map(format_date).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Short axis label: 2024-01-05 -> "05/01"
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(Some(1234567.0)), "1.234.567\u{a0}₫");
        assert_eq!(format_vnd(Some(999.0)), "999\u{a0}₫");
        assert_eq!(format_vnd(Some(1000.4)), "1.000\u{a0}₫");
        assert_eq!(format_vnd(Some(-25000.0)), "-25.000\u{a0}₫");
        assert_eq!(format_vnd(None), "0\u{a0}₫");
        assert_eq!(format_vnd(Some(f64::NAN)), "0\u{a0}₫");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(1234.0)), "1.234");
        assert_eq!(format_count(Some(12.0)), "12");
        assert_eq!(format_count(None), "0");
        assert_eq!(format_units(1_000_000), "1.000.000");
    }

    #[test]
    fn test_format_percent_and_growth() {
        assert_eq!(format_percent(Some(12.5)), "12,5%");
        assert_eq!(format_percent(Some(100.0)), "100%");
        assert_eq!(format_percent(Some(33.33)), "33,3%");
        assert_eq!(format_percent(None), "0%");

        assert_eq!(format_growth(Some(12.5)), Some("+12,5%".to_string()));
        assert_eq!(format_growth(Some(-3.0)), Some("-3%".to_string()));
        assert_eq!(format_growth(Some(-0.01)), Some("0%".to_string()));
        assert_eq!(format_growth(None), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05T00:00:00Z"), "5/1/2024");
        assert_eq!(format_date("2024-12-31T23:59:59.000Z"), "31/12/2024");
        assert_eq!(format_date("2024-03-15"), "15/3/2024");
        assert_eq!(format_date("yesterday"), "N/A");
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date_opt(None), "N/A");
    }

    #[test]
    fn test_format_date_uses_viewer_zone() {
        let hanoi = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_date_in("2024-06-02T17:00:00Z", hanoi), "3/6/2024");
        assert_eq!(format_date_in("2024-06-02T16:59:59.000Z", hanoi), "2/6/2024");
        assert_eq!(format_date_in("2024-06-02", hanoi), "2/6/2024");
        assert_eq!(format_date_in("2024-06-02T17:00:00", hanoi), "2/6/2024");
        assert_eq!(format_date_in("garbage", hanoi), "N/A");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact_vnd(1_250_000.0), "1,3 tr");
        assert_eq!(format_compact_vnd(2_000_000_000.0), "2 tỷ");
        assert_eq!(format_compact_vnd(15_000.0), "15k");
        assert_eq!(format_compact_vnd(500.0), "500");
    }

    #[test]
    fn test_format_day_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_day_month(date), "05/01");
        assert_eq!(format_naive_date(date), "5/1/2024");
    }
}
