use contracts::reports::SummaryMetrics;
use leptos::prelude::*;

use super::super::api;
use super::super::state::ReportFilters;
use super::super::view_model::summary_cards;
use crate::shared::components::load_state_view::ErrorBlock;
use crate::shared::components::stat_card::StatCard;
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::LoadState;

#[component]
pub fn SummaryCards(filters: ReportFilters) -> impl IntoView {
    let summary = use_remote("summary", move || Some(filters.range.get()), api::fetch_summary);

    move || match summary.state.get() {
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| summary.retry()) />
        }
        .into_any(),
        state => {
            let loading = !matches!(state, LoadState::Success(_));
            let metrics = state.data().cloned().unwrap_or_else(SummaryMetrics::default);
            view! {
                <div class="summary-cards">
                    {summary_cards(&metrics)
                        .into_iter()
                        .map(|card| view! {
                            <StatCard
                                label=card.label
                                value=card.value
                                growth=card.growth
                                loading=loading
                            />
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    }
}
