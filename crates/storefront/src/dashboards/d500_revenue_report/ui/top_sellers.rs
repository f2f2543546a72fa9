use contracts::reports::top_sellers;
use leptos::prelude::*;
use thaw::*;

use super::super::api;
use super::super::state::ReportFilters;
use super::super::view_model::{game_rows, GameRow};
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::LoadState;

#[component]
pub fn TopSellers(filters: ReportFilters) -> impl IntoView {
    let games = use_remote(
        "top sellers",
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
            view! { <EmptyBlock message="Chưa có game nào được bán" /> }.into_any()
        }
        LoadState::Success(records) => view! {
            <ol class="top-sellers">
                {game_rows(&top_sellers(&records)).into_iter().map(top_seller_item).collect_view()}
            </ol>
        }
        .into_any(),
    };

    view! {
        <Card class="report-widget">
            <h3 class="report-widget__title">"Game bán chạy"</h3>
            {body}
        </Card>
    }
}

pub fn top_seller_item(row: GameRow) -> impl IntoView {
    view! {
        <li class="top-sellers__item">
            <span class="top-sellers__rank">{row.rank}</span>
            {row.thumbnail.map(|src| view! { <img class="top-sellers__thumb" src=src alt="" /> })}
            <Flex vertical=true class="top-sellers__info">
                <span class="top-sellers__name">{row.name}</span>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{row.category}</Badge>
            </Flex>
            <Flex vertical=true align=FlexAlign::End>
                <span>{row.sales} " lượt bán"</span>
                <span class="top-sellers__revenue">{row.revenue}</span>
            </Flex>
        </li>
    }
}
