use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (remember, set_remember) = signal(true);

    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();
        let remember_val = remember.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // On success the auth state flips and the shell swaps this page out
            if let Err(e) = do_login(auth, email_val, password_val, remember_val).await {
                log::warn!("Login failed: {}", e);
                set_error_message.set(Some(format!("Đăng nhập thất bại: {}", e)));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Game Marketplace"</h1>
                <h2>"Đăng nhập"</h2>

                <Show when=move || auth.state.get().expired>
                    <div class="info-message">"Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại."</div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="ban@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Mật khẩu"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="remember"
                            prop:checked=move || remember.get()
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                            disabled=move || is_loading.get()
                        />
                        <label for="remember">"Ghi nhớ đăng nhập"</label>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Đang đăng nhập..." } else { "Đăng nhập" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
