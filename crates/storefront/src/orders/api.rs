use contracts::orders::{CreateOrderRequest, Order, RawOrder};

use crate::shared::api_utils::{get_json, path_segment, post_json_no_content, ApiError};
use crate::system::auth::session::Session;

/// Orders of the signed-in user, newest first as served by the backend
pub async fn fetch_order_history(session: Session) -> Result<Vec<Order>, ApiError> {
    let path = format!("/api/orders/user/{}", path_segment(&session.user.id));
    let raw: Vec<RawOrder> = get_json(&session, &path).await?;
    Ok(raw.into_iter().map(RawOrder::normalize).collect())
}

/// Checks out the cart. The created order is read back through the history.
pub async fn place_order(session: Session, request: CreateOrderRequest) -> Result<(), ApiError> {
    post_json_no_content(&session, "/api/orders", &request).await
}
