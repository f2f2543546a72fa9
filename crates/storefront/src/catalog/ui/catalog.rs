use contracts::catalog::{catalog_categories, CatalogQuery, CatalogSort, GameSummary};
use contracts::reports::filter::ALL_CATEGORIES;
use leptos::prelude::*;
use thaw::*;

use crate::cart::context::use_cart;
use crate::catalog::api;
use crate::shared::components::load_state_view::{EmptyBlock, ErrorBlock, LoadingBlock};
use crate::shared::format::format_vnd;
use crate::shared::remote_data::use_remote;
use crate::shared::request_state::LoadState;

#[component]
fn GameCard(game: GameSummary, feedback: RwSignal<Option<String>>) -> impl IntoView {
    let cart = use_cart();
    let id = game.id.clone();
    let in_cart = Signal::derive(move || cart.contains(&id));
    let price = match game.price {
        Some(p) if p > 0.0 => format_vnd(Some(p)),
        _ => "Miễn phí".to_string(),
    };
    let cover = game.thumbnail.clone().map(|src| view! {
        <img class="game-card__cover" src=src alt="" />
    });
    let description = game.description.clone().unwrap_or_default();
    let title = game.title.clone();
    let category = game.category_or_default().to_string();
    let publisher = game.publisher_name.clone().unwrap_or_default();

    let add = move |_| {
        feedback.set(cart.add(&game).err().map(|e| e.to_string()));
    };

    view! {
        <Card class="game-card">
            {cover}
            <div class="game-card__body">
                <h3 class="game-card__title">{title}</h3>
                <div class="game-card__meta">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{category}</Badge>
                    <span class="game-card__publisher">{publisher}</span>
                </div>
                <p class="game-card__description">{description}</p>
            </div>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="game-card__footer">
                <span class="game-card__price">{price}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=move || if in_cart.get() { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                    disabled=in_cart
                    on_click=add
                >
                    {move || if in_cart.get() { "Đã trong giỏ" } else { "Thêm vào giỏ" }}
                </Button>
            </Flex>
        </Card>
    }
}

/// Approved games with search, category filter and sort
#[component]
pub fn CatalogPage() -> impl IntoView {
    let games = use_remote("catalog", || Some(()), |session, ()| api::fetch_catalog(session));

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_string());
    let sort = RwSignal::new(CatalogSort::default().code().to_string());
    let feedback = RwSignal::new(None::<String>);

    let categories = Memo::new(move |_| match games.state.get() {
        LoadState::Success(list) => catalog_categories(&list),
        _ => Vec::new(),
    });

    let query = Memo::new(move |_| CatalogQuery {
        search: search.get(),
        category: category.get(),
        sort: CatalogSort::from_code(&sort.get()).unwrap_or_default(),
    });

    let body = move || match games.state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingBlock /> }.into_any(),
        LoadState::Error(error) => view! {
            <ErrorBlock error=error on_retry=Callback::new(move |_| games.retry()) />
        }
        .into_any(),
        LoadState::Success(list) => {
            let visible = query.with(|q| q.apply(&list));
            if visible.is_empty() {
                return view! { <EmptyBlock message="Không tìm thấy game phù hợp" /> }.into_any();
            }
            view! {
                <div class="game-grid">
                    {visible
                        .into_iter()
                        .map(|game| view! { <GameCard game=game feedback=feedback /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="page catalog">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cửa hàng game"</h1>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Input value=search placeholder="Tìm theo tên game hoặc nhà phát hành..." />
                        <Select value=category>
                            <option value=ALL_CATEGORIES>"Tất cả thể loại"</option>
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                    .collect_view()
                            }}
                        </Select>
                        <Select value=sort>
                            {CatalogSort::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
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
