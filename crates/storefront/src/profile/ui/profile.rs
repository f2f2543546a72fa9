use contracts::system::profile::{Profile, ProfileForm};
use leptos::prelude::*;
use thaw::*;

use crate::profile::api;
use crate::shared::components::load_state_view::{ErrorBlock, LoadingBlock};
use crate::shared::format::format_date_opt;
use crate::shared::remote_data::{spawn_action, use_remote};
use crate::shared::request_state::LoadState;
use crate::system::auth::context::use_auth;

/// Edits a loaded profile. A save keeps the form as typed and refreshes the
/// session user instead of reloading.
#[component]
fn ProfileEditor(profile: Profile) -> impl IntoView {
    let auth = use_auth();
    let initial = ProfileForm::from_profile(&profile);
    let username = RwSignal::new(initial.username);
    let avatar = RwSignal::new(initial.avatar);
    let bio = RwSignal::new(initial.bio);
    let phone = RwSignal::new(initial.phone);
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);

    let email = profile.email.clone().unwrap_or_default();
    let role = profile.role.display_name();
    let joined = format_date_opt(profile.created_at.as_deref());

    let save = move |_| {
        let form = ProfileForm {
            username: username.get_untracked(),
            avatar: avatar.get_untracked(),
            bio: bio.get_untracked(),
            phone: phone.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(e.to_string()));
                return;
            }
        };
        saved.set(false);
        let mut updated = profile.clone();
        updated.apply(&request);
        spawn_action(
            auth,
            "update profile",
            busy,
            feedback,
            move |session| api::update_profile(session, request),
            move || {
                auth.update_user(updated.to_user_info());
                saved.set(true);
            },
        );
    };

    view! {
        <Card class="profile">
            <Show when=move || saved.get()>
                <div class="page__feedback page__feedback--success">"Đã lưu hồ sơ"</div>
            </Show>
            {move || feedback.get().map(|msg| view! { <div class="page__feedback">{msg}</div> })}
            <dl class="profile__facts">
                <dt>"Email"</dt><dd>{email}</dd>
                <dt>"Vai trò"</dt><dd>{role}</dd>
                <dt>"Tham gia"</dt><dd>{joined}</dd>
            </dl>
            <Flex vertical=true gap=FlexGap::Medium>
                <Label>"Tên hiển thị"</Label>
                <Input value=username />
                <Label>"Ảnh đại diện (URL)"</Label>
                <Input value=avatar placeholder="https://..." />
                <Label>"Số điện thoại"</Label>
                <Input value=phone placeholder="0901 234 567" />
                <Label>"Giới thiệu"</Label>
                <Textarea value=bio />
                <Button appearance=ButtonAppearance::Primary disabled=Signal::derive(move || busy.get()) on_click=save>
                    {move || if busy.get() { "Đang lưu..." } else { "Lưu thay đổi" }}
                </Button>
            </Flex>
        </Card>
    }
}

/// View and edit the signed-in user's profile
#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = use_remote("profile", || Some(()), |session, ()| api::fetch_profile(session));

    let body = move || match profile.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| profile.retry()) />
        }
        .into_any(),
        LoadState::Success(loaded) => view! {
            <ProfileEditor profile=loaded />
        }
        .into_any(),
    };

    view! {
        <div class="page profile-page">
            <div class="page__header">
                <h1 class="page__title">"Hồ sơ của tôi"</h1>
            </div>
            <div class="page__content">{body}</div>
        </div>
    }
}
