use contracts::catalog::{GameStatus, GameSummary};
use leptos::prelude::*;
use thaw::*;

use crate::admin::api;
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::format::{format_date_opt, format_vnd};
use crate::shared::remote_data::{spawn_action, use_remote};
use crate::shared::request_state::LoadState;
use crate::system::auth::context::use_auth;

/// Review queue of games submitted by publishers
#[component]
pub fn GameApprovalList() -> impl IntoView {
    let auth = use_auth();
    let games = use_remote("pending games", || Some(()), |session, ()| {
        api::fetch_pending_games(session)
    });

    let search = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<String>);

    // Rejection dialog
    let reject_target = RwSignal::new(None::<GameSummary>);
    let reject_open = RwSignal::new(false);
    let reject_reason = RwSignal::new(String::new());

    let set_status = move |game_id: String, status: GameStatus, reason: Option<String>| {
        spawn_action(
            auth,
            "update game status",
            busy,
            feedback,
            move |session| api::update_game_status(session, game_id, status, reason),
            move || games.retry(),
        );
    };

    let open_reject = move |game: GameSummary| {
        reject_reason.set(String::new());
        reject_target.set(Some(game));
        reject_open.set(true);
    };

    let confirm_reject = move || {
        if let Some(game) = reject_target.get_untracked() {
            set_status(game.id, GameStatus::Rejected, Some(reject_reason.get_untracked()));
        }
        reject_open.set(false);
    };

    let body = move || match games.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| games.retry()) />
        }
        .into_any(),
        LoadState::Success(list) => {
            let filter = search.get();
            let visible: Vec<GameSummary> =
                list.into_iter().filter(|g| g.matches_filter(&filter)).collect();
            if visible.is_empty() {
                return view! { <EmptyBlock message="Không có game nào chờ duyệt" /> }.into_any();
            }
            view! {
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Game"</TableHeaderCell>
                            <TableHeaderCell>"Nhà phát hành"</TableHeaderCell>
                            <TableHeaderCell>"Giá"</TableHeaderCell>
                            <TableHeaderCell>"Ngày gửi"</TableHeaderCell>
                            <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {visible
                            .into_iter()
                            .map(|game| {
                                let approve_id = game.id.clone();
                                let reject_game = game.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{game.title.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{game.publisher_name.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>{format_vnd(game.price)}</TableCell>
                                        <TableCell>{format_date_opt(game.created_at.as_deref())}</TableCell>
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                                                {game.status.display_name()}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Primary
                                                    disabled=Signal::derive(move || busy.get())
                                                    on_click=move |_| set_status(approve_id.clone(), GameStatus::Approved, None)
                                                >
                                                    "Duyệt"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    disabled=Signal::derive(move || busy.get())
                                                    on_click=move |_| open_reject(reject_game.clone())
                                                >
                                                    "Từ chối"
                                                </Button>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            }
            .into_any()
        }
    };

    view! {
        <div class="page game-approval">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Duyệt game"</h1>
                </div>
                <div class="page__header-right">
                    <Input value=search placeholder="Tìm theo tên game hoặc nhà phát hành..." />
                </div>
            </div>
            {move || feedback.get().map(|msg| view! { <div class="page__feedback">{msg}</div> })}
            <div class="page__content">{body}</div>

            <Dialog open=reject_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || {
                                reject_target
                                    .get()
                                    .map(|g| format!("Từ chối \"{}\"", g.title))
                                    .unwrap_or_default()
                            }}
                        </DialogTitle>
                        <DialogContent>
                            <Textarea value=reject_reason placeholder="Lý do từ chối (không bắt buộc)" />
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| confirm_reject()>
                                "Từ chối"
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| reject_open.set(false)>
                                "Hủy"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
