use contracts::reports::DateRange;
use leptos::prelude::*;
use thaw::*;

use super::super::api;
use super::super::state::ReportFilters;
use super::super::view_model::revenue_trend;
use crate::shared::api_utils::ApiError;
use crate::shared::components::load_state_view::{ErrorBlock, LoadingBlock};
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::LoadState;

/// Daily revenue bars over the active range
#[component]
pub fn RevenueTrend(filters: ReportFilters) -> impl IntoView {
    let series = use_remote(
        "revenue series",
        move || Some(filters.range.get()),
        |session, range: DateRange| async move {
            let points = api::fetch_revenue_series(session, range.clone()).await?;
            Ok::<_, ApiError>((range, points))
        },
    );

    let body = move || match series.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| series.retry()) />
        }
        .into_any(),
        LoadState::Success((range, points)) => {
            let model = revenue_trend(&points, &range);
            view! {
                <Flex gap=FlexGap::Large class="revenue-trend__totals">
                    <span>"Tổng: " <strong>{model.total}</strong></span>
                    <span>"Trung bình/ngày: " <strong>{model.average}</strong></span>
                    {model.peak.map(|peak| view! { <span>"Cao nhất: " <strong>{peak}</strong></span> })}
                </Flex>
                <div class="revenue-trend__chart">
                    {model
                        .bars
                        .into_iter()
                        .map(|bar| view! {
                            <div class="revenue-trend__column" title=bar.tooltip>
                                <div
                                    class="revenue-trend__bar"
                                    style=format!("height: {:.1}%;", bar.height_pct)
                                ></div>
                                <div class="revenue-trend__axis">{bar.axis_label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Card class="report-widget revenue-trend">
            <h3 class="report-widget__title">"Doanh thu theo ngày"</h3>
            {body}
        </Card>
    }
}
