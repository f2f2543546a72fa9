use contracts::catalog::GameSummary;
use contracts::orders::{Cart, CartError};
use leptos::prelude::*;

/// Cart shared through context. It lives in memory only and is emptied on
/// sign-out.
#[derive(Clone, Copy)]
pub struct CartHandle {
    pub cart: RwSignal<Cart>,
}

impl CartHandle {
    pub fn add(&self, game: &GameSummary) -> Result<(), CartError> {
        let mut result = Ok(());
        self.cart.update(|cart| result = cart.add(game));
        result
    }

    pub fn remove(&self, game_id: &str) {
        self.cart.update(|cart| {
            cart.remove(game_id);
        });
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.cart.with(|cart| cart.contains(game_id))
    }

    /// Number of lines, tracked.
    pub fn count(&self) -> usize {
        self.cart.with(Cart::len)
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
    }
}

#[component]
pub fn CartProvider(children: ChildrenFn) -> impl IntoView {
    provide_context(CartHandle {
        cart: RwSignal::new(Cart::new()),
    });
    children()
}

pub fn use_cart() -> CartHandle {
    use_context::<CartHandle>().expect("CartProvider not found in component tree")
}
