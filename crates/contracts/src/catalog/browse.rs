//! Customer catalog: search, category filter and sort over the listed games.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{GameStatus, GameSummary};
use crate::reports::aggregate::DEFAULT_CATEGORY;
use crate::reports::filter::{compare_names, ALL_CATEGORIES};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Name,
}

impl CatalogSort {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogSort::Newest => "newest",
            CatalogSort::PriceAsc => "price_asc",
            CatalogSort::PriceDesc => "price_desc",
            CatalogSort::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogSort::Newest => "Mới nhất",
            CatalogSort::PriceAsc => "Giá tăng dần",
            CatalogSort::PriceDesc => "Giá giảm dần",
            CatalogSort::Name => "Tên A-Z",
        }
    }

    pub fn all() -> Vec<CatalogSort> {
        vec![
            CatalogSort::Newest,
            CatalogSort::PriceAsc,
            CatalogSort::PriceDesc,
            CatalogSort::Name,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl GameSummary {
    /// Category used for grouping and filtering; blank means "Khác".
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// Pending and rejected games never show up in the catalog. Rows without
    /// a status come from the public listing, which only serves approved games.
    pub fn is_listed(&self) -> bool {
        matches!(self.status, GameStatus::Approved | GameStatus::Unknown)
    }

    fn price_or_zero(&self) -> f64 {
        self.price.filter(|p| p.is_finite()).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search: String,
    /// A category name or [`ALL_CATEGORIES`].
    pub category: String,
    pub sort: CatalogSort,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: CatalogSort::default(),
        }
    }
}

impl CatalogQuery {
    pub fn matches(&self, game: &GameSummary) -> bool {
        game.is_listed()
            && game.matches_filter(&self.search)
            && (self.category == ALL_CATEGORIES || game.category_or_default() == self.category)
    }

    /// Matching games in display order. The sort is stable.
    pub fn apply(&self, games: &[GameSummary]) -> Vec<GameSummary> {
        let mut visible: Vec<GameSummary> =
            games.iter().filter(|g| self.matches(g)).cloned().collect();
        visible.sort_by(|a, b| compare_games(self.sort, a, b));
        visible
    }
}

fn compare_games(sort: CatalogSort, a: &GameSummary, b: &GameSummary) -> Ordering {
    match sort {
        // ISO timestamps order lexicographically; undated games go last
        CatalogSort::Newest => b.created_at.cmp(&a.created_at),
        CatalogSort::PriceAsc => a.price_or_zero().total_cmp(&b.price_or_zero()),
        CatalogSort::PriceDesc => b.price_or_zero().total_cmp(&a.price_or_zero()),
        CatalogSort::Name => compare_names(&a.title, &b.title),
    }
}

/// Category options of the catalog filter, alphabetical.
pub fn catalog_categories(games: &[GameSummary]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for game in games.iter().filter(|g| g.is_listed()) {
        let category = game.category_or_default();
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories.sort_by(|a, b| compare_names(a, b));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, title: &str, category: Option<&str>, price: f64, created: &str) -> GameSummary {
        GameSummary {
            id: id.to_string(),
            title: title.to_string(),
            publisher_name: Some("Studio".to_string()),
            category: category.map(str::to_string),
            price: Some(price),
            status: GameStatus::Approved,
            created_at: Some(created.to_string()),
            thumbnail: None,
            description: None,
        }
    }

    fn catalog() -> Vec<GameSummary> {
        vec![
            game("1", "Đảo Hoang", Some("Sinh tồn"), 120000.0, "2024-03-01T00:00:00Z"),
            game("2", "Anh Hùng", Some("RPG"), 250000.0, "2024-05-01T00:00:00Z"),
            game("3", "Bão Cát", None, 0.0, "2024-04-01T00:00:00Z"),
        ]
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let ids: Vec<String> = CatalogQuery::default()
            .apply(&catalog())
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_price_and_name_sorts() {
        let mut query = CatalogQuery {
            sort: CatalogSort::PriceDesc,
            ..CatalogQuery::default()
        };
        assert_eq!(query.apply(&catalog())[0].id, "2");

        query.sort = CatalogSort::PriceAsc;
        assert_eq!(query.apply(&catalog())[0].id, "3");

        query.sort = CatalogSort::Name;
        let titles: Vec<String> = query.apply(&catalog()).into_iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Anh Hùng", "Bão Cát", "Đảo Hoang"]);
    }

    #[test]
    fn test_search_and_category_filter() {
        let query = CatalogQuery {
            search: "đảo".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(query.apply(&catalog()).len(), 1);

        let query = CatalogQuery {
            category: DEFAULT_CATEGORY.to_string(),
            ..CatalogQuery::default()
        };
        let found = query.apply(&catalog());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }

    #[test]
    fn test_unlisted_games_are_hidden() {
        let mut games = catalog();
        games[0].status = GameStatus::Pending;
        games[1].status = GameStatus::Rejected;
        let visible = CatalogQuery::default().apply(&games);
        assert_eq!(visible.len(), 1);
        assert_eq!(catalog_categories(&games), vec![DEFAULT_CATEGORY.to_string()]);
    }

    #[test]
    fn test_categories_are_alphabetical() {
        assert_eq!(
            catalog_categories(&catalog()),
            vec!["Khác".to_string(), "RPG".to_string(), "Sinh tồn".to_string()]
        );
    }

    #[test]
    fn test_sort_codes() {
        for sort in CatalogSort::all() {
            assert_eq!(CatalogSort::from_code(sort.code()), Some(sort));
        }
        assert_eq!(CatalogSort::from_code("random"), None);
    }
}
