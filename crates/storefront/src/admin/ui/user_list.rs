use contracts::system::auth::UserRole;
use contracts::system::users::filter_users;
use leptos::prelude::*;
use thaw::*;

use crate::admin::api;
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::format::format_date_opt;
use crate::shared::remote_data::{spawn_action, use_remote};
use crate::shared::request_state::LoadState;
use crate::system::auth::context::use_auth;

const ROLE_ALL: &str = "all";

/// Customer and publisher accounts with block/unblock
#[component]
pub fn UserList() -> impl IntoView {
    let auth = use_auth();
    let users = use_remote("users", || Some(()), |session, ()| api::fetch_users(session));

    let search = RwSignal::new(String::new());
    let role = RwSignal::new(ROLE_ALL.to_string());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<String>);

    let toggle_block = move |user_id: String, blocked: bool| {
        spawn_action(
            auth,
            if blocked { "block user" } else { "unblock user" },
            busy,
            feedback,
            move |session| api::set_user_blocked(session, user_id, blocked),
            move || users.retry(),
        );
    };

    let body = move || match users.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| users.retry()) />
        }
        .into_any(),
        LoadState::Success(list) => {
            let visible = filter_users(&list, &search.get(), UserRole::from_code(&role.get()));
            if visible.is_empty() {
                return view! { <EmptyBlock message="Không tìm thấy người dùng" /> }.into_any();
            }
            view! {
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Tên"</TableHeaderCell>
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            <TableHeaderCell>"Vai trò"</TableHeaderCell>
                            <TableHeaderCell>"Ngày tạo"</TableHeaderCell>
                            <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {visible
                            .into_iter()
                            .map(|user| {
                                let id = user.id.clone();
                                let blocked = user.is_blocked;
                                let is_admin = user.role == UserRole::Admin;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{user.username.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{user.email.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>{user.role.display_name()}</TableCell>
                                        <TableCell>{format_date_opt(user.created_at.as_deref())}</TableCell>
                                        <TableCell>
                                            {if blocked {
                                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Đã khóa"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Hoạt động"</Badge> }.into_any()
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=if blocked { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                                                disabled=Signal::derive(move || busy.get() || is_admin)
                                                on_click=move |_| toggle_block(id.clone(), !blocked)
                                            >
                                                {if blocked { "Mở khóa" } else { "Khóa" }}
                                            </Button>
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
        <div class="page user-list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Người dùng & nhà phát hành"</h1>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Input value=search placeholder="Tìm theo tên hoặc email..." />
                        <Select value=role>
                            <option value=ROLE_ALL>"Tất cả"</option>
                            {UserRole::all()
                                .into_iter()
                                .map(|r| view! { <option value=r.code()>{r.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>
                </div>
            </div>
            {move || feedback.get().map(|msg| view! { <div class="page__feedback">{msg}</div> })}
            <div class="page__content">{body}</div>
        </div>
    }
}
