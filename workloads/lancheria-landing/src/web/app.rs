//! Root component.

use leptos::ev;
use leptos::prelude::*;

use lancheria_cart::config::StoreConfig;
use lancheria_cart::Cart;

use super::browser;
use super::cart::{CartPanel, FloatingCart};
use super::sections::{FaqSection, Hero, MapSection, MenuSection, SiteFooter, SiteHeader};
use crate::content::store_config;
use crate::interactions::INITIAL_REVEAL_DELAY;

/// The whole landing page.
///
/// Owns the page-session state: the cart and the last scroll offset. Both
/// are handed to the sections that need them.
#[component]
pub fn App() -> impl IntoView {
    let config = store_config();
    let cart = RwSignal::new(Cart::new());
    let scroll = RwSignal::new(browser::scroll_y());

    let _ = window_event_listener(ev::scroll, move |_| {
        scroll.update(|y| *y = browser::scroll_y());
    });

    // Cards already on screen at load have not seen a scroll event yet.
    set_timeout(
        move || scroll.update(|y| *y = browser::scroll_y()),
        INITIAL_REVEAL_DELAY,
    );

    let default_message = config.whatsapp.default_message.clone();
    Effect::new(move |_| {
        let changed = browser::prefill_whatsapp_links(&default_message);
        leptos::logging::log!("prefilled {} whatsapp link(s)", changed);
    });

    let contact_href = match config.whatsapp.contact_link() {
        Ok(href) => href,
        Err(e) => {
            leptos::logging::warn!("contact link disabled: {}", e);
            "#".to_string()
        }
    };
    let maps_url = match config.maps_url() {
        Ok(url) => Some(url),
        Err(e) => {
            leptos::logging::warn!("map link disabled: {}", e);
            None
        }
    };

    let StoreConfig {
        business,
        whatsapp,
        menu,
        faq,
        ..
    } = config;
    let header_name = business.name.clone();
    let hero_name = business.name.clone();
    let hero_href = contact_href.clone();

    view! {
        <SiteHeader name=header_name scroll=scroll/>
        <main>
            <Hero name=hero_name tagline=business.tagline contact_href=hero_href/>
            <MenuSection menu=menu cart=cart scroll=scroll/>
            <CartPanel cart=cart whatsapp=whatsapp/>
            <FaqSection faq=faq scroll=scroll/>
            <MapSection maps_url=maps_url/>
        </main>
        <SiteFooter name=business.name contact_href=contact_href/>
        <FloatingCart cart=cart/>
    }
}
