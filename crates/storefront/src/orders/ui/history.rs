use contracts::orders::{derive_game_sales, summarize_orders, Order, OrderStatus};
use contracts::reports::top_sellers;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d500_revenue_report::ui::top_sellers::top_seller_item;
use crate::dashboards::d500_revenue_report::view_model::game_rows;
use crate::orders::api;
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_count, format_date_opt, format_vnd};
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::LoadState;

fn status_color(status: OrderStatus) -> BadgeColor {
    match status {
        OrderStatus::Completed => BadgeColor::Success,
        OrderStatus::Cancelled | OrderStatus::Refunded => BadgeColor::Danger,
        OrderStatus::Pending => BadgeColor::Warning,
        OrderStatus::Unknown => BadgeColor::Informative,
    }
}

/// Purchase history of the signed-in customer
#[component]
pub fn OrderHistory() -> impl IntoView {
    let orders = use_remote("order history", || Some(()), |session, ()| {
        api::fetch_order_history(session)
    });

    let body = move || match orders.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| orders.retry()) />
        }
        .into_any(),
        LoadState::Success(list) if list.is_empty() => {
            view! { <EmptyBlock message="Bạn chưa có đơn hàng nào" /> }.into_any()
        }
        LoadState::Success(list) => {
            let summary = summarize_orders(&list);
            let favourites = game_rows(&top_sellers(&derive_game_sales(&list)));
            view! {
                <div class="summary-cards">
                    <StatCard
                        label="Số đơn hàng"
                        value=format_count(Some(summary.order_count as f64))
                        growth=None
                    />
                    <StatCard label="Tổng chi tiêu" value=format_vnd(Some(summary.total_spent)) growth=None />
                    <StatCard
                        label="Số game đã mua"
                        value=format_count(Some(summary.distinct_games as f64))
                        growth=None
                    />
                </div>

                <Card class="report-widget">
                    <h3 class="report-widget__title">"Mua nhiều nhất"</h3>
                    <ol class="top-sellers">
                        {favourites.into_iter().map(top_seller_item).collect_view()}
                    </ol>
                </Card>

                <Card class="report-widget">
                    <h3 class="report-widget__title">"Đơn hàng"</h3>
                    <OrdersTable orders=list />
                </Card>
            }
            .into_any()
        }
    };

    view! {
        <div class="page order-history">
            <div class="page__header">
                <h1 class="page__title">"Lịch sử mua hàng"</h1>
            </div>
            <Flex vertical=true gap=FlexGap::Large class="page__content">
                {body}
            </Flex>
        </div>
    }
}

#[component]
fn OrdersTable(orders: Vec<Order>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Mã đơn"</TableHeaderCell>
                    <TableHeaderCell>"Ngày"</TableHeaderCell>
                    <TableHeaderCell>"Game"</TableHeaderCell>
                    <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                    <TableHeaderCell>"Tổng tiền"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {orders
                    .into_iter()
                    .map(|order| {
                        let names = order
                            .items
                            .iter()
                            .map(|i| {
                                if i.quantity > 1 {
                                    format!("{} ×{}", i.name, i.quantity)
                                } else {
                                    i.name.clone()
                                }
                            })
                            .collect::<Vec<_>>()
                            .join(", ");
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>{order.id}</TableCellLayout>
                                </TableCell>
                                <TableCell>{format_date_opt(order.created_at.as_deref())}</TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{names}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <Badge appearance=BadgeAppearance::Tint color=status_color(order.status)>
                                        {order.status.display_name()}
                                    </Badge>
                                </TableCell>
                                <TableCell>{format_vnd(Some(order.total))}</TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}
