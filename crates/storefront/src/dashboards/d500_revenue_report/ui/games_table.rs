use contracts::reports::filter::distinct_categories;
use contracts::reports::{GameListQuery, SortMode, ALL_CATEGORIES};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use super::super::state::{category_after_reload, create_table_state, ReportFilters};
use super::super::view_model::game_rows;
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::config::config;
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::{GenerationCounter, LoadState};

/// Per-game revenue with search, category filter and sort
#[component]
pub fn GamesTable(filters: ReportFilters) -> impl IntoView {
    let table = create_table_state();
    let games = use_remote(
        "games table",
        move || Some(filters.range.get()),
        api::fetch_game_revenue,
    );

    // Debounce: only the last keystroke within the delay reaches the query
    let debounce = GenerationCounter::new();
    on_cleanup({
        let debounce = debounce.clone();
        move || debounce.invalidate()
    });
    Effect::new(move |_| {
        let input = table.search_input.get();
        let ticket = debounce.next_ticket();
        spawn_local(async move {
            TimeoutFuture::new(config().reports.search_debounce_ms).await;
            if ticket.is_current() {
                table.query.update(|q| q.search = input);
            }
        });
    });

    Effect::new(move |_| {
        let category = table.category.get();
        let sort = table.sort_mode();
        table.query.update(|q| {
            q.category = category;
            q.sort = sort;
        });
    });

    // `None` while loading, so a pending reload never clears the selection
    let loaded_categories = Memo::new(move |_| {
        games
            .state
            .with(|s| s.data().map(|records| distinct_categories(records)))
    });
    let categories = RwSignal::new(Vec::<String>::new());

    // A category that disappears after a range change falls back to "all"
    Effect::new(move |_| {
        let Some(available) = loaded_categories.get() else {
            return;
        };
        let current = table.category.get_untracked();
        if let Some(next) = category_after_reload(&current, Some(&available)) {
            table.category.set(next);
        }
        categories.set(available);
    });

    let body = move || match games.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| games.retry()) />
        }
        .into_any(),
        LoadState::Success(records) => {
            let query: GameListQuery = table.query.get();
            let rows = game_rows(&query.apply(&records));
            if rows.is_empty() {
                return view! { <EmptyBlock message="Không tìm thấy game phù hợp" /> }.into_any();
            }
            view! {
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"#"</TableHeaderCell>
                            <TableHeaderCell>"Game"</TableHeaderCell>
                            <TableHeaderCell>"Thể loại"</TableHeaderCell>
                            <TableHeaderCell>"Lượt bán"</TableHeaderCell>
                            <TableHeaderCell>"Doanh thu"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <TableRow>
                                    <TableCell>{row.rank}</TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{row.category}</TableCell>
                                    <TableCell>{row.sales}</TableCell>
                                    <TableCell>{row.revenue}</TableCell>
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
        <Card class="report-widget games-table">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3 class="report-widget__title">"Doanh thu theo game"</h3>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Input value=table.search_input placeholder="Tìm theo tên game..." />
                    <Select value=table.category>
                        <option value=ALL_CATEGORIES>"Tất cả thể loại"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect_view()
                        }}
                    </Select>
                    <Select value=table.sort>
                        {SortMode::all()
                            .into_iter()
                            .map(|mode| view! { <option value=mode.code()>{mode.label()}</option> })
                            .collect_view()}
                    </Select>
                </Flex>
            </Flex>
            {body}
        </Card>
    }
}
