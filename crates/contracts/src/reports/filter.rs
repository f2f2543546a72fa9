//! Search, category filter and sort modes of the per-game revenue table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::dto::GameRevenueRecord;

/// Category filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Revenue, highest first.
    #[default]
    Revenue,
    /// Units sold, highest first.
    Sales,
    /// Name, A to Z in Vietnamese alphabetical order.
    Name,
}

impl SortMode {
    pub fn code(&self) -> &'static str {
        match self {
            SortMode::Revenue => "revenue",
            SortMode::Sales => "sales",
            SortMode::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Revenue => "Doanh thu cao nhất",
            SortMode::Sales => "Bán chạy nhất",
            SortMode::Name => "Tên (A-Z)",
        }
    }

    pub fn all() -> Vec<SortMode> {
        vec![SortMode::Revenue, SortMode::Sales, SortMode::Name]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

/// Current state of the table toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameListQuery {
    pub search: String,
    pub category: String,
    pub sort: SortMode,
}

impl Default for GameListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortMode::default(),
        }
    }
}

impl GameListQuery {
    pub fn matches(&self, record: &GameRevenueRecord) -> bool {
        let search = self.search.trim().to_lowercase();
        let name_ok = search.is_empty() || record.name.to_lowercase().contains(&search);
        let category_ok = self.category == ALL_CATEGORIES || record.category == self.category;
        name_ok && category_ok
    }

    /// Filtered and sorted copy of `records`.
    pub fn apply(&self, records: &[GameRevenueRecord]) -> Vec<GameRevenueRecord> {
        let mut result: Vec<GameRevenueRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        sort_records(&mut result, self.sort);
        result
    }
}

/// Stable sort, so applying the same mode twice is a no-op.
pub fn sort_records(records: &mut [GameRevenueRecord], mode: SortMode) {
    match mode {
        SortMode::Revenue => records.sort_by(|a, b| b.revenue.total_cmp(&a.revenue)),
        SortMode::Sales => records.sort_by(|a, b| b.sales.cmp(&a.sales)),
        SortMode::Name => records.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

/// Category options for the filter dropdown, in first-appearance order.
pub fn distinct_categories(records: &[GameRevenueRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for record in records {
        if !categories.iter().any(|c| c == &record.category) {
            categories.push(record.category.clone());
        }
    }
    categories
}

// ---------------------------------------------------------------------------
// Vietnamese collation
// ---------------------------------------------------------------------------

/// Base letters with their tone variants, in the order
/// ngang, huyền, hỏi, ngã, sắc, nặng.
const TONE_TABLE: &[(char, u8, &str)] = &[
    ('a', 0, "aàảãáạ"),
    ('a', 1, "ăằẳẵắặ"),
    ('a', 2, "âầẩẫấậ"),
    ('e', 0, "eèẻẽéẹ"),
    ('e', 1, "êềểễếệ"),
    ('i', 0, "iìỉĩíị"),
    ('o', 0, "oòỏõóọ"),
    ('o', 1, "ôồổỗốộ"),
    ('o', 2, "ơờởỡớợ"),
    ('u', 0, "uùủũúụ"),
    ('u', 1, "ưừửữứự"),
    ('y', 0, "yỳỷỹýỵ"),
];

/// Sort key: letters first (ă after a, đ after d), then tone marks, then case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    letters: Vec<(char, u8)>,
    tones: Vec<u8>,
    original: String,
}

pub fn collation_key(value: &str) -> CollationKey {
    let mut letters = Vec::with_capacity(value.len());
    let mut tones = Vec::with_capacity(value.len());

    for c in value.chars().flat_map(char::to_lowercase) {
        let (base, variant, tone) = decompose(c);
        letters.push((base, variant));
        tones.push(tone);
    }

    CollationKey {
        letters,
        tones,
        original: value.to_string(),
    }
}

fn decompose(c: char) -> (char, u8, u8) {
    if c == 'đ' {
        return ('d', 1, 0);
    }
    for (base, variant, row) in TONE_TABLE {
        if let Some(tone) = row.chars().position(|t| t == c) {
            return (*base, *variant, tone as u8);
        }
    }
    (c, 0, 0)
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, category: &str, revenue: f64, sales: u64) -> GameRevenueRecord {
        GameRevenueRecord {
            game_id: name.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            thumbnail: None,
            revenue,
            sales,
        }
    }

    fn names(records: &[GameRevenueRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<GameRevenueRecord> {
        vec![
            game("Elden Ring", "RPG", 900.0, 3),
            game("Stardew Valley", "Simulation", 300.0, 9),
            game("Đường Về", "Indie", 300.0, 2),
            game("Dota Underlords", "Strategy", 50.0, 9),
            game("Ăn Khế", "Indie", 10.0, 1),
            game("Age of Empires", "Strategy", 600.0, 4),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = GameListQuery {
            search: "  RING ".to_string(),
            ..GameListQuery::default()
        };
        assert_eq!(names(&query.apply(&sample())), vec!["Elden Ring"]);

        let query = GameListQuery {
            search: "đường".to_string(),
            ..GameListQuery::default()
        };
        assert_eq!(names(&query.apply(&sample())), vec!["Đường Về"]);
    }

    #[test]
    fn test_category_filter() {
        let query = GameListQuery {
            category: "Strategy".to_string(),
            sort: SortMode::Sales,
            ..GameListQuery::default()
        };
        assert_eq!(
            names(&query.apply(&sample())),
            vec!["Dota Underlords", "Age of Empires"]
        );

        let all = GameListQuery::default().apply(&sample());
        assert_eq!(all.len(), 6);

        let none = GameListQuery {
            category: "strategy".to_string(),
            ..GameListQuery::default()
        };
        assert!(none.apply(&sample()).is_empty());
    }

    #[test]
    fn test_sort_modes() {
        let mut records = sample();
        sort_records(&mut records, SortMode::Revenue);
        assert_eq!(
            names(&records),
            vec![
                "Elden Ring",
                "Age of Empires",
                "Stardew Valley",
                "Đường Về",
                "Dota Underlords",
                "Ăn Khế"
            ]
        );

        sort_records(&mut records, SortMode::Sales);
        assert_eq!(names(&records)[..2], ["Stardew Valley", "Dota Underlords"]);
    }

    #[test]
    fn test_name_sort_follows_vietnamese_alphabet() {
        let mut records = sample();
        sort_records(&mut records, SortMode::Name);
        assert_eq!(
            names(&records),
            vec![
                "Age of Empires",
                "Ăn Khế",
                "Dota Underlords",
                "Đường Về",
                "Elden Ring",
                "Stardew Valley"
            ]
        );
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        for mode in SortMode::all() {
            let mut once = sample();
            sort_records(&mut once, SortMode::Revenue);
            sort_records(&mut once, mode);
            let mut twice = once.clone();
            sort_records(&mut twice, mode);
            assert_eq!(once, twice, "{:?}", mode);
        }
    }

    #[test]
    fn test_tones_only_break_ties() {
        assert_eq!(compare_names("ma", "má"), Ordering::Less);
        assert_eq!(compare_names("má", "mb"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_names("dz", "đa"), Ordering::Less);
    }

    #[test]
    fn test_distinct_categories() {
        assert_eq!(
            distinct_categories(&sample()),
            vec!["RPG", "Simulation", "Indie", "Strategy"]
        );
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_sort_mode_codes() {
        for mode in SortMode::all() {
            assert_eq!(SortMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(SortMode::from_code("price"), None);
    }
}
