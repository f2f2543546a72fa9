use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::reports::aggregate::DEFAULT_CATEGORY;
use crate::reports::dto::{non_blank, GameRevenueRecord, UNKNOWN_GAME_NAME};
use crate::shared::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
    Refunded,
    Unknown,
}

impl OrderStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "pending" | "processing" => OrderStatus::Pending,
            "completed" | "paid" | "success" | "succeeded" => OrderStatus::Completed,
            "cancelled" | "canceled" | "failed" => OrderStatus::Cancelled,
            "refunded" => OrderStatus::Refunded,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Đang xử lý",
            OrderStatus::Completed => "Hoàn thành",
            OrderStatus::Cancelled => "Đã hủy",
            OrderStatus::Refunded => "Đã hoàn tiền",
            OrderStatus::Unknown => "Không rõ",
        }
    }

    /// Whether the order's items count as sold games.
    pub fn counts_as_sale(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled | OrderStatus::Refunded)
    }
}

// ---------------------------------------------------------------------------
// Canonical shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub game_id: String,
    pub name: String,
    pub category: String,
    pub thumbnail: Option<String>,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// ISO timestamp as sent by the backend; formatted only for display.
    pub created_at: Option<String>,
    pub status: OrderStatus,
    pub total: f64,
    pub items: Vec<OrderItem>,
}

// ---------------------------------------------------------------------------
// Raw wire shapes
// ---------------------------------------------------------------------------

/// `game` on an order item is either the bare id or the populated document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GameRef {
    Id(String),
    Game(RawGameRef),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGameRef {
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, alias = "coverImage")]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrderItem {
    #[serde(default, alias = "gameId", deserialize_with = "lenient::opt_string")]
    pub game_id: Option<String>,
    #[serde(default)]
    pub game: Option<GameRef>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub quantity: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrder {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "totalAmount", deserialize_with = "lenient::opt_f64")]
    pub total_amount: Option<f64>,
    #[serde(default, alias = "totalPrice", deserialize_with = "lenient::opt_f64")]
    pub total: Option<f64>,
    #[serde(default, alias = "orderItems")]
    pub items: Vec<RawOrderItem>,
}

impl RawOrderItem {
    pub fn normalize(self) -> OrderItem {
        let game = match self.game {
            Some(GameRef::Game(game)) => game,
            Some(GameRef::Id(id)) => RawGameRef {
                id: Some(id),
                ..RawGameRef::default()
            },
            None => RawGameRef::default(),
        };

        let quantity = self.quantity.unwrap_or(1).min(u32::MAX as u64) as u32;
        let unit_price = self.price.unwrap_or(0.0);

        OrderItem {
            game_id: self
                .game_id
                .or(game.object_id)
                .or(game.id)
                .unwrap_or_default(),
            name: non_blank(self.name)
                .or_else(|| non_blank(self.title))
                .or_else(|| non_blank(game.name))
                .or_else(|| non_blank(game.title))
                .unwrap_or_else(|| UNKNOWN_GAME_NAME.to_string()),
            category: non_blank(self.category)
                .or_else(|| non_blank(game.category))
                .or_else(|| non_blank(game.genre))
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            thumbnail: non_blank(self.thumbnail)
                .or_else(|| non_blank(game.thumbnail))
                .or_else(|| non_blank(game.cover_image)),
            unit_price,
            quantity,
            line_total: self.total.unwrap_or(unit_price * quantity as f64),
        }
    }
}

impl RawOrder {
    pub fn normalize(self) -> Order {
        let items: Vec<OrderItem> = self.items.into_iter().map(RawOrderItem::normalize).collect();
        let items_total: f64 = items.iter().map(|i| i.line_total).sum();

        Order {
            id: self.id.or(self.object_id).unwrap_or_default(),
            created_at: non_blank(self.created_at),
            status: self
                .status
                .as_deref()
                .map(OrderStatus::from_code)
                .unwrap_or(OrderStatus::Unknown),
            total: self.total_amount.or(self.total).unwrap_or(items_total),
            items,
        }
    }
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Groups the items of all sale-counting orders by game and sums units and
/// line totals. Games appear in order of first purchase; pass the result to
/// `top_n_by_sales` for a ranking.
pub fn derive_game_sales(orders: &[Order]) -> Vec<GameRevenueRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut records: Vec<GameRevenueRecord> = Vec::new();

    let items = orders
        .iter()
        .filter(|o| o.status.counts_as_sale())
        .flat_map(|o| o.items.iter());

    for item in items {
        let key = if item.game_id.is_empty() {
            item.name.clone()
        } else {
            item.game_id.clone()
        };
        match index.get(&key).copied() {
            Some(i) => {
                records[i].sales += item.quantity as u64;
                records[i].revenue += item.line_total;
            }
            None => {
                index.insert(key, records.len());
                records.push(GameRevenueRecord {
                    game_id: item.game_id.clone(),
                    name: item.name.clone(),
                    category: item.category.clone(),
                    thumbnail: item.thumbnail.clone(),
                    revenue: item.line_total,
                    sales: item.quantity as u64,
                });
            }
        }
    }

    records
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderHistorySummary {
    pub order_count: usize,
    /// Sum over sale-counting orders only.
    pub total_spent: f64,
    pub distinct_games: usize,
}

pub fn summarize_orders(orders: &[Order]) -> OrderHistorySummary {
    OrderHistorySummary {
        order_count: orders.len(),
        total_spent: orders
            .iter()
            .filter(|o| o.status.counts_as_sale())
            .map(|o| o.total)
            .sum(),
        distinct_games: derive_game_sales(orders).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::aggregate::top_n_by_sales;

    fn parse_orders(json: &str) -> Vec<Order> {
        let raw: Vec<RawOrder> = serde_json::from_str(json).unwrap();
        raw.into_iter().map(RawOrder::normalize).collect()
    }

    const HISTORY: &str = r#"[
        {
            "_id": "o1",
            "createdAt": "2024-01-05T00:00:00Z",
            "status": "completed",
            "items": [
                {"game": {"_id": "g1", "title": "Hades", "genre": "Roguelike"}, "price": 200000},
                {"gameId": "g2", "name": "Celeste", "price": "150000", "quantity": 2}
            ]
        },
        {
            "id": 7,
            "status": "PAID",
            "totalAmount": 190000,
            "orderItems": [
                {"game": "g1", "name": "Hades", "price": 200000, "total": 190000}
            ]
        },
        {
            "_id": "o3",
            "status": "cancelled",
            "items": [{"gameId": "g3", "name": "Inside", "price": 90000}]
        }
    ]"#;

    #[test]
    fn test_normalize_orders() {
        let orders = parse_orders(HISTORY);
        assert_eq!(orders.len(), 3);

        let first = &orders[0];
        assert_eq!(first.id, "o1");
        assert_eq!(first.status, OrderStatus::Completed);
        assert_eq!(first.items[0].game_id, "g1");
        assert_eq!(first.items[0].name, "Hades");
        assert_eq!(first.items[0].category, "Roguelike");
        assert_eq!(first.items[0].quantity, 1);
        assert_eq!(first.items[1].line_total, 300000.0);
        assert_eq!(first.total, 500000.0);

        let second = &orders[1];
        assert_eq!(second.id, "7");
        assert_eq!(second.status, OrderStatus::Completed);
        assert_eq!(second.items[0].game_id, "g1");
        assert_eq!(second.items[0].line_total, 190000.0);
        assert_eq!(second.total, 190000.0);
        assert_eq!(second.created_at, None);
    }

    #[test]
    fn test_derive_game_sales_skips_cancelled_orders() {
        let orders = parse_orders(HISTORY);
        let sales = derive_game_sales(&orders);

        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].game_id, "g1");
        assert_eq!(sales[0].sales, 2);
        assert_eq!(sales[0].revenue, 390000.0);
        assert_eq!(sales[1].game_id, "g2");
        assert_eq!(sales[1].sales, 2);

        let ranked = top_n_by_sales(&sales, 1);
        assert_eq!(ranked[0].name, "Hades");
    }

    #[test]
    fn test_summarize_orders() {
        let summary = summarize_orders(&parse_orders(HISTORY));
        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.total_spent, 690000.0);
        assert_eq!(summary.distinct_games, 2);

        assert_eq!(summarize_orders(&[]), OrderHistorySummary::default());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderStatus::from_code(" Canceled "), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from_code("refunded"), OrderStatus::Refunded);
        assert_eq!(OrderStatus::from_code("weird"), OrderStatus::Unknown);
        assert!(!OrderStatus::Refunded.counts_as_sale());
        assert!(OrderStatus::Pending.counts_as_sale());
    }
}
