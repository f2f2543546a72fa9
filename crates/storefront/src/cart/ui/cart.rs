use leptos::prelude::*;
use thaw::*;

use crate::cart::context::use_cart;
use crate::orders::api;
use crate::shared::components::load_state_view::EmptyBlock;
use crate::shared::format::format_vnd;
use crate::shared::remote_data::spawn_action;
use crate::system::auth::context::use_auth;

/// Cart lines, total and checkout
#[component]
pub fn CartPage() -> impl IntoView {
    let auth = use_auth();
    let cart = use_cart();
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<String>);
    let placed = RwSignal::new(false);

    let checkout = move |_| {
        let request = match cart.cart.with_untracked(|c| c.to_order_request()) {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(e.to_string()));
                return;
            }
        };
        placed.set(false);
        spawn_action(
            auth,
            "checkout",
            busy,
            feedback,
            move |session| api::place_order(session, request),
            move || {
                cart.clear();
                placed.set(true);
            },
        );
    };

    let lines = move || {
        let lines = cart.cart.with(|c| c.lines().to_vec());
        if lines.is_empty() {
            return view! { <EmptyBlock message="Giỏ hàng đang trống" /> }.into_any();
        }
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Game"</TableHeaderCell>
                        <TableHeaderCell>"Thể loại"</TableHeaderCell>
                        <TableHeaderCell>"Giá"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {lines
                        .into_iter()
                        .map(|line| {
                            let id = line.game_id.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{line.title.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{line.category.clone()}</TableCell>
                                    <TableCell>{format_vnd(Some(line.price))}</TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            disabled=Signal::derive(move || busy.get())
                                            on_click=move |_| cart.remove(&id)
                                        >
                                            "Xóa"
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
    };

    view! {
        <div class="page cart">
            <div class="page__header">
                <h1 class="page__title">"Giỏ hàng"</h1>
            </div>
            <Show when=move || placed.get()>
                <div class="page__feedback page__feedback--success">
                    "Đặt hàng thành công. Xem game đã mua trong lịch sử mua hàng."
                </div>
            </Show>
            {move || feedback.get().map(|msg| view! { <div class="page__feedback">{msg}</div> })}
            <Card class="page__content">{lines}</Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="cart__footer">
                <span class="cart__total">
                    "Tổng cộng: " {move || format_vnd(Some(cart.cart.with(|c| c.total())))}
                </span>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || busy.get() || cart.cart.with(|c| c.is_empty()))
                    on_click=checkout
                >
                    {move || if busy.get() { "Đang thanh toán..." } else { "Thanh toán" }}
                </Button>
            </Flex>
        </div>
    }
}
