/// Utilities for calendar dates used by pickers and reports
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use contracts::reports::date_range::QUERY_DATE_FORMAT;

/// Today in the browser's local timezone.
///
/// `chrono::Local` has no timezone source in wasm, so the date is read from
/// a JS `Date`.
pub fn today_local() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// UTC offset of the browser's zone; UTC outside the browser.
pub fn local_offset() -> FixedOffset {
    #[cfg(target_arch = "wasm32")]
    {
        // getTimezoneOffset counts minutes behind UTC
        let minutes = js_sys::Date::new_0().get_timezone_offset().round() as i32;
        if let Some(offset) = FixedOffset::west_opt(minutes * 60) {
            return offset;
        }
    }
    Utc.fix()
}

/// Value for `<input type="date">`: "2024-01-05"
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(QUERY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_input_value() {
        assert_eq!(
            to_input_value(NaiveDate::from_ymd_opt(2024, 1, 5)),
            "2024-01-05"
        );
        assert_eq!(to_input_value(None), "");
    }
}
