//! Cart list, checkout button and floating badge.

use leptos::ev;
use leptos::prelude::*;

use lancheria_cart::config::WhatsAppSettings;
use lancheria_cart::{Cart, CartError};

use super::browser;

const EMPTY_CART_ALERT: &str = "Seu carrinho está vazio!";

#[component]
pub(super) fn CartPanel(cart: RwSignal<Cart>, whatsapp: WhatsAppSettings) -> impl IntoView {
    let rendered = Memo::new(move |_| cart.with(Cart::render));
    let whatsapp = StoredValue::new(whatsapp);

    // One handler for the whole list; rows are plain markup from `to_html`.
    let remove = move |ev: ev::MouseEvent| {
        let Some(id) = browser::clicked_item_id(&ev) else {
            return;
        };
        cart.update(|c| {
            if let Err(e) = c.remove_item(&id) {
                leptos::logging::warn!("remove failed: {}", e);
            }
        });
    };

    let checkout = move |_| {
        let result = cart.with_untracked(|c| whatsapp.with_value(|settings| c.checkout(settings)));
        match result {
            Ok(link) => browser::open(link.url(), link.target()),
            Err(CartError::EmptyCart) => browser::alert(EMPTY_CART_ALERT),
            Err(e) => leptos::logging::warn!("checkout failed: {}", e),
        }
    };

    view! {
        <section class="carrinho" id="carrinho">
            <div class="container">
                <h2 class="section-title">"Seu pedido"</h2>
                <ul
                    id="cart-items"
                    class="cart-items"
                    inner_html=move || rendered.get().to_html()
                    on:click=remove
                ></ul>
                <p class="cart-summary">
                    "Total: R$ "
                    <strong id="cart-total">{move || rendered.get().total}</strong>
                </p>
                <div class="cart-actions">
                    <button class="btn btn-secondary" on:click=move |_| cart.update(Cart::clear)>
                        "Limpar"
                    </button>
                    <button class="btn btn-whatsapp" on:click=checkout>
                        "Finalizar pelo WhatsApp"
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Badge shown only while the cart has items.
#[component]
pub(super) fn FloatingCart(cart: RwSignal<Cart>) -> impl IntoView {
    let rendered = Memo::new(move |_| cart.with(Cart::render));

    view! {
        <a
            href="#carrinho"
            class="cart-floating"
            aria-label="Ver carrinho"
            style=move || format!("display: {}", rendered.get().indicator_display())
            on:click=move |ev: ev::MouseEvent| browser::scroll_to_anchor(&ev, "#carrinho")
        >
            "🛒"
            <span class="cart-count">{move || rendered.get().item_count}</span>
        </a>
    }
}
