use contracts::disputes::{filter_disputes, summarize_disputes, DisputeStatus};
use leptos::prelude::*;
use thaw::*;

use crate::admin::api;
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_count, format_date_opt, format_vnd};
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::LoadState;

const STATUS_ALL: &str = "all";

fn status_color(status: DisputeStatus) -> BadgeColor {
    match status {
        DisputeStatus::Open => BadgeColor::Danger,
        DisputeStatus::Investigating => BadgeColor::Warning,
        DisputeStatus::Resolved => BadgeColor::Success,
        DisputeStatus::Rejected | DisputeStatus::Unknown => BadgeColor::Informative,
    }
}

/// Read-only view of order disputes, unresolved first
#[component]
pub fn DisputeMonitor() -> impl IntoView {
    let disputes = use_remote("disputes", || Some(()), |session, ()| api::fetch_disputes(session));

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL.to_string());

    let body = move || match disputes.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| disputes.retry()) />
        }
        .into_any(),
        LoadState::Success(list) => {
            let summary = summarize_disputes(&list);
            let visible = filter_disputes(&list, DisputeStatus::from_code(&status.get()), &search.get());
            let table = if visible.is_empty() {
                view! { <EmptyBlock message="Không có khiếu nại nào" /> }.into_any()
            } else {
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Đơn hàng"</TableHeaderCell>
                                <TableHeaderCell>"Khách hàng"</TableHeaderCell>
                                <TableHeaderCell>"Game"</TableHeaderCell>
                                <TableHeaderCell>"Lý do"</TableHeaderCell>
                                <TableHeaderCell>"Số tiền"</TableHeaderCell>
                                <TableHeaderCell>"Ngày tạo"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {visible
                                .into_iter()
                                .map(|d| view! {
                                    <TableRow>
                                        <TableCell>{d.order_id.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>{d.customer_name.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{d.game_title.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{d.reason.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{format_vnd(d.amount)}</TableCell>
                                        <TableCell>{format_date_opt(d.created_at.as_deref())}</TableCell>
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=status_color(d.status)>
                                                {d.status.display_name()}
                                            </Badge>
                                        </TableCell>
                                    </TableRow>
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            };
            view! {
                <div class="summary-cards">
                    <StatCard label="Mới mở" value=format_count(Some(summary.open as f64)) growth=None />
                    <StatCard
                        label="Đang xem xét"
                        value=format_count(Some(summary.investigating as f64))
                        growth=None
                    />
                    <StatCard label="Đã giải quyết" value=format_count(Some(summary.resolved as f64)) growth=None />
                    <StatCard label="Số tiền tranh chấp" value=format_vnd(Some(summary.amount_at_stake)) growth=None />
                </div>
                <Card class="report-widget">{table}</Card>
            }
            .into_any()
        }
    };

    view! {
        <div class="page dispute-monitor">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Khiếu nại đơn hàng"</h1>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Input value=search placeholder="Tìm theo khách hàng, game, mã đơn..." />
                        <Select value=status>
                            <option value=STATUS_ALL>"Tất cả"</option>
                            {DisputeStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>
                </div>
            </div>
            <Flex vertical=true gap=FlexGap::Large class="page__content">
                {body}
            </Flex>
        </div>
    }
}
