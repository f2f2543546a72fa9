use leptos::prelude::*;
use thaw::*;

use super::category_breakdown::CategoryBreakdown;
use super::games_table::GamesTable;
use super::revenue_trend::RevenueTrend;
use super::summary_cards::SummaryCards;
use super::top_sellers::TopSellers;
use crate::dashboards::d500_revenue_report::state::create_filters;
use crate::shared::components::date_range_picker::DateRangePicker;

/// Admin revenue report. Every widget loads on its own, so one slow or
/// failing endpoint does not hold the others back.
#[component]
pub fn RevenueReportDashboard() -> impl IntoView {
    let filters = create_filters();

    view! {
        <div id="d500_revenue_report--dashboard" class="page revenue-report">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Báo cáo doanh thu"</h1>
                </div>
                <div class="page__header-right">
                    <DateRangePicker range=filters.range active_preset=filters.preset />
                </div>
            </div>

            <Flex vertical=true gap=FlexGap::Large class="page__content">
                <SummaryCards filters=filters />
                <RevenueTrend filters=filters />
                <Flex gap=FlexGap::Large class="revenue-report__row">
                    <CategoryBreakdown filters=filters />
                    <TopSellers filters=filters />
                </Flex>
                <GamesTable filters=filters />
            </Flex>
        </div>
    }
}
