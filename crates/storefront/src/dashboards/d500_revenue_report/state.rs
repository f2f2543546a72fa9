use contracts::reports::{DateRange, DateRangePreset, GameListQuery, SortMode, ALL_CATEGORIES};
use leptos::prelude::*;

use crate::shared::config::config;
use crate::shared::date_utils::today_local;

/// Filters shared by every widget of the report.
#[derive(Clone, Copy)]
pub struct ReportFilters {
    pub range: RwSignal<DateRange>,
    pub preset: RwSignal<Option<DateRangePreset>>,
}

pub fn create_filters() -> ReportFilters {
    let preset = config().reports.preset();
    ReportFilters {
        range: RwSignal::new(preset.resolve(today_local())),
        preset: RwSignal::new(Some(preset)),
    }
}

/// Toolbar inputs of the games table. `search_input` follows every
/// keystroke; `query.search` only gets it after the debounce delay.
#[derive(Clone, Copy)]
pub struct GamesTableState {
    pub search_input: RwSignal<String>,
    pub category: RwSignal<String>,
    pub sort: RwSignal<String>,
    pub query: RwSignal<GameListQuery>,
}

pub fn create_table_state() -> GamesTableState {
    let query = GameListQuery::default();
    GamesTableState {
        search_input: RwSignal::new(String::new()),
        category: RwSignal::new(query.category.clone()),
        sort: RwSignal::new(query.sort.code().to_string()),
        query: RwSignal::new(query),
    }
}

impl GamesTableState {
    pub fn sort_mode(&self) -> SortMode {
        SortMode::from_code(&self.sort.get()).unwrap_or_default()
    }
}

/// Category to switch to after a reload, or `None` to keep the selection.
///
/// `available` is `None` while the new rows are still loading; the selection
/// is only dropped once loaded data no longer contains it.
pub fn category_after_reload(current: &str, available: Option<&[String]>) -> Option<String> {
    let available = available?;
    if current == ALL_CATEGORIES || available.iter().any(|c| c == current) {
        None
    } else {
        Some(ALL_CATEGORIES.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_selection_survives_loading() {
        assert_eq!(category_after_reload("RPG", None), None);
    }

    #[test]
    fn test_selection_kept_when_still_present() {
        let loaded = names(&["Indie", "RPG"]);
        assert_eq!(category_after_reload("RPG", Some(&loaded)), None);
        assert_eq!(category_after_reload(ALL_CATEGORIES, Some(&[])), None);
    }

    #[test]
    fn test_selection_reset_when_gone() {
        let loaded = names(&["Indie"]);
        assert_eq!(
            category_after_reload("RPG", Some(&loaded)),
            Some(ALL_CATEGORIES.to_string())
        );
    }
}
