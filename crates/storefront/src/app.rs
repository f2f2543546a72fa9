use leptos::prelude::*;
use thaw::*;

use crate::admin::ui::{DisputeMonitor, GameApprovalList, UserList};
use crate::cart::context::{use_cart, CartProvider};
use crate::cart::ui::CartPage;
use crate::catalog::ui::CatalogPage;
use crate::dashboards::RevenueReportDashboard;
use crate::orders::ui::OrderHistory;
use crate::profile::ui::ProfilePage;
use crate::publisher::ui::UploadWizard;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::auth::guard::{RequireAdmin, RequireAuth, RequirePublisher};
use crate::system::auth::session::AuthState;
use crate::system::pages::login::LoginPage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Cart,
    Orders,
    Profile,
    RevenueReport,
    GameApproval,
    Users,
    Upload,
    Disputes,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Catalog => "Cửa hàng",
            Page::Cart => "Giỏ hàng",
            Page::Orders => "Đơn hàng của tôi",
            Page::Profile => "Hồ sơ",
            Page::RevenueReport => "Báo cáo doanh thu",
            Page::GameApproval => "Duyệt game",
            Page::Users => "Người dùng",
            Page::Upload => "Tải game lên",
            Page::Disputes => "Khiếu nại",
        }
    }

    /// Pages shown in the navigation for the signed-in user
    pub fn visible_for(state: &AuthState) -> Vec<Page> {
        let mut pages = vec![Page::Catalog, Page::Cart, Page::Orders, Page::Profile];
        if state.is_publisher() {
            pages.push(Page::Upload);
        }
        if state.is_admin() {
            pages.extend([
                Page::RevenueReport,
                Page::GameApproval,
                Page::Users,
                Page::Disputes,
            ]);
        }
        pages
    }
}

#[component]
fn PageContent(page: Page) -> impl IntoView {
    match page {
        Page::Catalog => view! { <RequireAuth><CatalogPage /></RequireAuth> }.into_any(),
        Page::Cart => view! { <RequireAuth><CartPage /></RequireAuth> }.into_any(),
        Page::Profile => view! { <RequireAuth><ProfilePage /></RequireAuth> }.into_any(),
        Page::Orders => view! { <RequireAuth><OrderHistory /></RequireAuth> }.into_any(),
        Page::RevenueReport => {
            view! { <RequireAdmin><RevenueReportDashboard /></RequireAdmin> }.into_any()
        }
        Page::GameApproval => view! { <RequireAdmin><GameApprovalList /></RequireAdmin> }.into_any(),
        Page::Users => view! { <RequireAdmin><UserList /></RequireAdmin> }.into_any(),
        Page::Upload => view! { <RequirePublisher><UploadWizard /></RequirePublisher> }.into_any(),
        Page::Disputes => view! { <RequireAdmin><DisputeMonitor /></RequireAdmin> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let auth = use_auth();
    let cart = use_cart();
    let active = RwSignal::new(Page::Catalog);

    let nav_label = move |page: Page| match page {
        Page::Cart => match cart.count() {
            0 => page.label().to_string(),
            n => format!("{} ({})", page.label(), n),
        },
        _ => page.label().to_string(),
    };

    let user_name = move || {
        auth.state
            .with(|s| s.session.as_ref().map(|session| session.user.username.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="app-shell">
            <header class="app-shell__header">
                <span class="app-shell__brand">"Game Marketplace"</span>
                <nav class="app-shell__nav">
                    {move || {
                        auth.state
                            .with(Page::visible_for)
                            .into_iter()
                            .map(|page| view! {
                                <Button
                                    appearance=move || if active.get() == page {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                    on_click=move |_| active.set(page)
                                >
                                    {move || nav_label(page)}
                                </Button>
                            })
                            .collect_view()
                    }}
                </nav>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <span class="app-shell__user">{user_name}</span>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| auth.sign_out()>
                        "Đăng xuất"
                    </Button>
                </Flex>
            </header>
            <main class="app-shell__content">
                {move || {
                    let page = active.get();
                    view! { <PageContent page=page /> }
                }}
            </main>
        </div>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            // A fresh cart per sign-in
            <CartProvider>
                <MainLayout />
            </CartProvider>
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </ConfigProvider>
    }
}
