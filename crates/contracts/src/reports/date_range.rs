use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Wire format of a report bound (`YYYY-MM-DD`).
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeError {
    #[error("Ngày bắt đầu {from} sau ngày kết thúc {to}")]
    Inverted { from: NaiveDate, to: NaiveDate },
    #[error("Ngày không hợp lệ: {0}")]
    InvalidDate(String),
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Quick-select buttons of the report toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangePreset {
    Today,
    Last7Days,
    Last30Days,
    Last90Days,
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl DateRangePreset {
    pub fn code(&self) -> &'static str {
        match self {
            DateRangePreset::Today => "today",
            DateRangePreset::Last7Days => "7days",
            DateRangePreset::Last30Days => "30days",
            DateRangePreset::Last90Days => "90days",
            DateRangePreset::ThisMonth => "thisMonth",
            DateRangePreset::LastMonth => "lastMonth",
            DateRangePreset::ThisYear => "thisYear",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::Today => "Hôm nay",
            DateRangePreset::Last7Days => "7 ngày qua",
            DateRangePreset::Last30Days => "30 ngày qua",
            DateRangePreset::Last90Days => "90 ngày qua",
            DateRangePreset::ThisMonth => "Tháng này",
            DateRangePreset::LastMonth => "Tháng trước",
            DateRangePreset::ThisYear => "Năm nay",
        }
    }

    pub fn all() -> Vec<DateRangePreset> {
        vec![
            DateRangePreset::Today,
            DateRangePreset::Last7Days,
            DateRangePreset::Last30Days,
            DateRangePreset::Last90Days,
            DateRangePreset::ThisMonth,
            DateRangePreset::LastMonth,
            DateRangePreset::ThisYear,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }

    /// Resolves the preset against a caller-supplied "today".
    ///
    /// `Ndays` presets span `today - N days ..= today`; month and year presets
    /// start on the first day of the period.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let (from, to) = match self {
            DateRangePreset::Today => (today, today),
            DateRangePreset::Last7Days => (today - Duration::days(7), today),
            DateRangePreset::Last30Days => (today - Duration::days(30), today),
            DateRangePreset::Last90Days => (today - Duration::days(90), today),
            DateRangePreset::ThisMonth => (first_day_of_month(today), today),
            DateRangePreset::LastMonth => {
                let end = first_day_of_month(today) - Duration::days(1);
                (first_day_of_month(end), end)
            }
            DateRangePreset::ThisYear => (today - Duration::days(today.ordinal0() as i64), today),
        };
        DateRange {
            from,
            to,
            label: self.label().to_string(),
        }
    }
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Reporting window, both bounds inclusive. `from <= to` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
    label: String,
}

/// Query-string form of a range: `?from=YYYY-MM-DD&to=YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeQuery {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate, label: impl Into<String>) -> Result<Self, DateRangeError> {
        if from > to {
            return Err(DateRangeError::Inverted { from, to });
        }
        Ok(Self {
            from,
            to,
            label: label.into(),
        })
    }

    /// Range picked from two explicit bounds, labelled `dd/mm/yyyy - dd/mm/yyyy`.
    pub fn custom(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        let label = format!("{} - {}", from.format("%d/%m/%Y"), to.format("%d/%m/%Y"));
        Self::new(from, to, label)
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Every day of the range in ascending order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take_while(move |d| *d <= self.to)
    }

    pub fn query(&self) -> DateRangeQuery {
        DateRangeQuery {
            from: self.from.format(QUERY_DATE_FORMAT).to_string(),
            to: self.to.format(QUERY_DATE_FORMAT).to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Custom bounds as they are being picked
// ---------------------------------------------------------------------------

/// Bounds of a custom range while the user is still picking them.
///
/// A report request is only issued once [`DateRangeDraft::build`] returns a
/// range, so a half-filled picker never reaches the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeDraft {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeDraft {
    /// Sets the start bound from an `<input type="date">` value; empty clears it.
    pub fn set_from_str(&mut self, value: &str) -> Result<(), DateRangeError> {
        self.from = parse_input_date(value)?;
        Ok(())
    }

    pub fn set_to_str(&mut self, value: &str) -> Result<(), DateRangeError> {
        self.to = parse_input_date(value)?;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// `None` while a bound is missing, otherwise the validated range.
    pub fn build(&self) -> Option<Result<DateRange, DateRangeError>> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateRange::custom(from, to)),
            _ => None,
        }
    }
}

fn parse_input_date(value: &str) -> Result<Option<NaiveDate>, DateRangeError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, QUERY_DATE_FORMAT)
        .map(Some)
        .map_err(|_| DateRangeError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_30_days() {
        let range = DateRangePreset::Last30Days.resolve(date(2024, 6, 15));
        assert_eq!(range.from(), date(2024, 5, 16));
        assert_eq!(range.to(), date(2024, 6, 15));
        assert_eq!(range.label(), "30 ngày qua");
        assert_eq!(
            range.query(),
            DateRangeQuery {
                from: "2024-05-16".to_string(),
                to: "2024-06-15".to_string(),
            }
        );
    }

    #[test]
    fn test_presets_are_never_inverted() {
        let days = [
            date(2024, 1, 1),
            date(2024, 2, 29),
            date(2024, 3, 1),
            date(2023, 12, 31),
            date(2025, 7, 15),
        ];
        for today in days {
            for preset in DateRangePreset::all() {
                let range = preset.resolve(today);
                assert!(range.from() <= range.to(), "{:?} on {}", preset, today);
                assert!(range.to() <= today);
            }
        }
    }

    #[test]
    fn test_month_presets() {
        let today = date(2024, 3, 10);
        let this_month = DateRangePreset::ThisMonth.resolve(today);
        assert_eq!(this_month.from(), date(2024, 3, 1));
        assert_eq!(this_month.to(), today);

        let last_month = DateRangePreset::LastMonth.resolve(today);
        assert_eq!(last_month.from(), date(2024, 2, 1));
        assert_eq!(last_month.to(), date(2024, 2, 29));

        let january = DateRangePreset::LastMonth.resolve(date(2024, 1, 20));
        assert_eq!(january.from(), date(2023, 12, 1));
        assert_eq!(january.to(), date(2023, 12, 31));

        let year = DateRangePreset::ThisYear.resolve(today);
        assert_eq!(year.from(), date(2024, 1, 1));
    }

    #[test]
    fn test_preset_codes_round_trip() {
        for preset in DateRangePreset::all() {
            assert_eq!(DateRangePreset::from_code(preset.code()), Some(preset));
        }
        assert_eq!(DateRangePreset::from_code("365days"), None);
    }

    #[test]
    fn test_custom_range_rejects_inverted_bounds() {
        let err = DateRange::custom(date(2024, 6, 2), date(2024, 6, 1)).unwrap_err();
        assert_eq!(
            err,
            DateRangeError::Inverted {
                from: date(2024, 6, 2),
                to: date(2024, 6, 1)
            }
        );

        let single = DateRange::custom(date(2024, 6, 1), date(2024, 6, 1)).unwrap();
        assert_eq!(single.days(), 1);
        assert_eq!(single.label(), "01/06/2024 - 01/06/2024");
    }

    #[test]
    fn test_draft_waits_for_both_bounds() {
        let mut draft = DateRangeDraft::default();
        assert!(draft.build().is_none());

        draft.set_from_str("2024-06-01").unwrap();
        assert!(!draft.is_complete());
        assert!(draft.build().is_none());

        draft.set_to_str("2024-06-07").unwrap();
        let range = draft.build().unwrap().unwrap();
        assert_eq!(range.days(), 7);
        assert_eq!(range.iter_days().count(), 7);

        draft.set_to_str("").unwrap();
        assert!(draft.build().is_none());
        assert!(draft.set_from_str("06/01/2024").is_err());
    }
}
