use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.state.get().is_authenticated()
            fallback=move || {
                let message = if auth.state.get().expired {
                    "Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại."
                } else {
                    "Vui lòng đăng nhập để tiếp tục."
                };
                view! { <div class="guard-message">{message}</div> }
            }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.state.get().is_admin()
            fallback=|| view! { <div class="guard-message">"Bạn cần quyền quản trị để xem trang này."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires a publisher account
#[component]
pub fn RequirePublisher(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.state.get().is_publisher()
            fallback=|| view! { <div class="guard-message">"Chỉ nhà phát hành mới có thể tải game lên."</div> }
        >
            {children()}
        </Show>
    }
}
