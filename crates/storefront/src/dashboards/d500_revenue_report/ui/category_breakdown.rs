use contracts::reports::group_by_category;
use leptos::prelude::*;
use thaw::*;

use super::super::api;
use super::super::state::ReportFilters;
use super::super::view_model::category_rows;
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::LoadState;

/// Revenue share per category
#[component]
pub fn CategoryBreakdown(filters: ReportFilters) -> impl IntoView {
    let games = use_remote(
        "category breakdown",
        move || Some(filters.range.get()),
        api::fetch_game_revenue,
    );

    let body = move || match games.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| games.retry()) />
        }
        .into_any(),
        LoadState::Success(records) if records.is_empty() => {
            view! { <EmptyBlock message="Không có doanh thu trong khoảng thời gian này" /> }.into_any()
        }
        LoadState::Success(records) => {
            let rows = category_rows(&group_by_category(&records));
            view! {
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Thể loại"</TableHeaderCell>
                            <TableHeaderCell>"Doanh thu"</TableHeaderCell>
                            <TableHeaderCell>"Tỷ lệ"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{row.category}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{row.revenue}</TableCell>
                                    <TableCell>
                                        <div class="category-share">
                                            <div
                                                class="category-share__bar"
                                                style=format!("width: {:.1}%;", row.share)
                                            ></div>
                                            <span>{row.percentage}</span>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            }
            .into_any()
        }
    };

    view! {
        <Card class="report-widget category-breakdown">
            <h3 class="report-widget__title">"Doanh thu theo thể loại"</h3>
            {body}
        </Card>
    }
}
