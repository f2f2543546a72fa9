use leptos::prelude::*;
use thaw::*;

use crate::shared::api_utils::ApiError;
use crate::system::auth::context::use_auth;

/// Inline placeholder while a widget is loading.
#[component]
pub fn LoadingBlock() -> impl IntoView {
    view! {
        <Flex justify=FlexJustify::Center class="widget__loading">
            <Spinner />
        </Flex>
    }
}

/// Inline error with a retry button. Authorization failures also offer to
/// sign in again.
#[component]
pub fn ErrorBlock(error: ApiError, on_retry: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let reauth = error.needs_reauth().then(|| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Primary
                on_click=move |_| auth.sign_out()
            >
                "Đăng nhập lại"
            </Button>
        }
    });

    view! {
        <Flex vertical=true gap=FlexGap::Small align=FlexAlign::Center class="widget__error">
            <span>{error.to_string()}</span>
            <Flex gap=FlexGap::Small>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_retry.run(())
                >
                    "Thử lại"
                </Button>
                {reauth}
            </Flex>
        </Flex>
    }
}

#[component]
pub fn EmptyBlock(message: &'static str) -> impl IntoView {
    view! { <div class="widget__empty">{message}</div> }
}
