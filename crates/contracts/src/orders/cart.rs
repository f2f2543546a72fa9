//! Shopping cart kept in memory until checkout. Games are digital, so every
//! line has quantity one and a game can be in the cart once.

use serde::{Deserialize, Serialize};

use crate::catalog::{GameStatus, GameSummary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("\"{0}\" đã có trong giỏ hàng")]
    AlreadyInCart(String),
    #[error("\"{0}\" hiện không được bán")]
    NotForSale(String),
    #[error("Giỏ hàng đang trống")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub game_id: String,
    pub title: String,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub category: String,
}

/// One line of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub game: String,
    pub price: f64,
    pub quantity: u32,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineRequest>,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.lines.iter().any(|l| l.game_id == game_id)
    }

    pub fn add(&mut self, game: &GameSummary) -> Result<(), CartError> {
        if matches!(game.status, GameStatus::Pending | GameStatus::Rejected) {
            return Err(CartError::NotForSale(game.title.clone()));
        }
        if self.contains(&game.id) {
            return Err(CartError::AlreadyInCart(game.title.clone()));
        }
        self.lines.push(CartLine {
            game_id: game.id.clone(),
            title: game.title.clone(),
            price: game.price.filter(|p| p.is_finite() && *p >= 0.0).unwrap_or(0.0),
            thumbnail: game.thumbnail.clone(),
            category: game.category_or_default().to_string(),
        });
        Ok(())
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, game_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.game_id != game_id);
        self.lines.len() != before
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.price).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn to_order_request(&self) -> Result<CreateOrderRequest, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }
        Ok(CreateOrderRequest {
            items: self
                .lines
                .iter()
                .map(|l| OrderLineRequest {
                    game: l.game_id.clone(),
                    price: l.price,
                    quantity: 1,
                })
                .collect(),
            total_amount: self.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, price: Option<f64>, status: GameStatus) -> GameSummary {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": format!("Game {id}"),
            "price": price,
            "status": status.code(),
        }))
        .unwrap()
    }

    #[test]
    fn test_add_and_total() {
        let mut cart = Cart::new();
        cart.add(&game("a", Some(100000.0), GameStatus::Approved)).unwrap();
        cart.add(&game("b", None, GameStatus::Approved)).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 100000.0);
        assert_eq!(cart.lines()[1].category, "Khác");
    }

    #[test]
    fn test_same_game_is_added_once() {
        let mut cart = Cart::new();
        let g = game("a", Some(5.0), GameStatus::Approved);
        cart.add(&g).unwrap();
        assert_eq!(cart.add(&g), Err(CartError::AlreadyInCart("Game a".to_string())));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_pending_game_cannot_be_bought() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.add(&game("p", Some(5.0), GameStatus::Pending)),
            Err(CartError::NotForSale(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.add(&game("a", Some(5.0), GameStatus::Approved)).unwrap();
        assert!(!cart.remove("zzz"));
        assert!(cart.remove("a"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_request_shape() {
        let mut cart = Cart::new();
        assert_eq!(cart.to_order_request(), Err(CartError::Empty));

        cart.add(&game("a", Some(120.0), GameStatus::Approved)).unwrap();
        cart.add(&game("b", Some(30.0), GameStatus::Unknown)).unwrap();
        let json = serde_json::to_value(cart.to_order_request().unwrap()).unwrap();
        assert_eq!(json["totalAmount"], 150.0);
        assert_eq!(json["items"][0]["game"], "a");
        assert_eq!(json["items"][1]["quantity"], 1);
    }
}
