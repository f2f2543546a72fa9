//! Customer order history and checkout.

pub mod cart;
pub mod dto;

pub use cart::{Cart, CartError, CartLine, CreateOrderRequest, OrderLineRequest};

pub use dto::{
    derive_game_sales, summarize_orders, GameRef, Order, OrderHistorySummary, OrderItem,
    OrderStatus, RawOrder, RawOrderItem,
};
