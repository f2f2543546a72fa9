//! Game catalog entries: the customer catalog and the admin approval queue
//! read the same rows.

pub mod browse;

use serde::{Deserialize, Serialize};

pub use browse::{catalog_categories, CatalogQuery, CatalogSort};

use crate::shared::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl GameStatus {
    pub fn code(&self) -> &'static str {
        match self {
            GameStatus::Pending => "pending",
            GameStatus::Approved => "approved",
            GameStatus::Rejected => "rejected",
            GameStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameStatus::Pending => "Chờ duyệt",
            GameStatus::Approved => "Đã duyệt",
            GameStatus::Rejected => "Từ chối",
            GameStatus::Unknown => "Không rõ",
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default, alias = "publisherName")]
    pub publisher_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "coverImage")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PATCH /api/admin/games/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGameStatusRequest {
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl GameSummary {
    /// Case-insensitive match on title or publisher.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        filter.is_empty()
            || self.title.to_lowercase().contains(&filter)
            || self
                .publisher_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pending_game() {
        let game: GameSummary = serde_json::from_str(
            r#"{"_id":"g9","name":"Tetris 99","publisherName":"Nintendo","price":"99000","status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(game.id, "g9");
        assert_eq!(game.title, "Tetris 99");
        assert_eq!(game.price, Some(99000.0));
        assert_eq!(game.status, GameStatus::Pending);
        assert!(game.matches_filter("ninten"));
        assert!(!game.matches_filter("sega"));
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let game: GameSummary =
            serde_json::from_str(r#"{"id":"g1","title":"X","status":"draft"}"#).unwrap();
        assert_eq!(game.status, GameStatus::Unknown);
    }

    #[test]
    fn test_status_request_body() {
        let body = UpdateGameStatusRequest {
            status: GameStatus::Approved,
            reason: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"approved"}"#);
    }
}
