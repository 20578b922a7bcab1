//! Page sections.

use leptos::prelude::*;
use leptos::{ev, html};

use lancheria_cart::config::{FaqEntry, MenuEntry};
use lancheria_cart::whatsapp::NEW_TAB;
use lancheria_cart::Cart;

use super::browser;
use crate::content::SECTIONS;
use crate::interactions::{self, activates_link, header_shadow, FaqAccordion, NavMenu};

/// Fixed header with the hamburger menu.
#[component]
pub(super) fn SiteHeader(name: String, scroll: RwSignal<f64>) -> impl IntoView {
    let nav = RwSignal::new(NavMenu::default());
    let toggle_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Nav>::new();

    let _ = window_event_listener(ev::click, move |ev| {
        let inside_toggle = toggle_ref
            .get_untracked()
            .is_some_and(|el| browser::contains_target(&el, &ev));
        let inside_menu = menu_ref
            .get_untracked()
            .is_some_and(|el| browser::contains_target(&el, &ev));
        nav.update(|n| n.click_outside(inside_toggle, inside_menu));
    });

    let links = SECTIONS
        .iter()
        .map(|(id, label)| {
            let href = format!("#{}", id);
            let target = href.clone();
            view! {
                <a
                    href=href
                    on:click=move |ev: ev::MouseEvent| {
                        nav.update(NavMenu::close);
                        browser::scroll_to_anchor(&ev, &target);
                    }
                >
                    {*label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header
            class="header"
            id="header"
            style=move || format!("box-shadow: {}", header_shadow(scroll.get()))
        >
            <div class="container header-content">
                <a
                    href="#inicio"
                    class="logo"
                    on:click=move |ev: ev::MouseEvent| browser::scroll_to_anchor(&ev, "#inicio")
                >
                    {name}
                </a>
                <button
                    class="nav-toggle"
                    id="navToggle"
                    aria-label="Abrir menu"
                    node_ref=toggle_ref
                    class:active=move || nav.get().is_open()
                    on:click=move |_| nav.update(NavMenu::toggle)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav
                    class="nav-menu"
                    id="navMenu"
                    node_ref=menu_ref
                    class:active=move || nav.get().is_open()
                >
                    {links}
                </nav>
            </div>
        </header>
    }
}

#[component]
pub(super) fn Hero(name: String, tagline: String, contact_href: String) -> impl IntoView {
    view! {
        <section class="hero" id="inicio">
            <div class="container hero-content">
                <h1 class="hero-title">{name}</h1>
                <p class="hero-subtitle">{tagline}</p>
                <div class="hero-actions">
                    <a
                        href="#cardapio"
                        class="btn btn-primary"
                        on:click=move |ev: ev::MouseEvent| browser::scroll_to_anchor(&ev, "#cardapio")
                    >
                        "Ver cardápio"
                    </a>
                    <a href=contact_href class="btn btn-whatsapp" target=NEW_TAB rel="noopener">
                        "Pedir pelo WhatsApp"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Menu cards, each with an "add to cart" button.
#[component]
pub(super) fn MenuSection(
    menu: Vec<MenuEntry>,
    cart: RwSignal<Cart>,
    scroll: RwSignal<f64>,
) -> impl IntoView {
    let cards = menu
        .into_iter()
        .filter_map(|entry| {
            let Some(price) = entry.money() else {
                leptos::logging::warn!("menu entry {:?} has an unusable price", entry.name);
                return None;
            };
            let name = entry.name.clone();
            Some(view! {
                <RevealOnScroll scroll=scroll>
                    <article class="servico-card">
                        <h3>{entry.name}</h3>
                        <p class="card-description">{entry.description}</p>
                        <div class="card-footer">
                            <span class="card-price">{price.display()}</span>
                            <button
                                class="btn btn-add"
                                on:click=move |_| {
                                    cart.update(|c| {
                                        if let Err(e) = c.add(name.clone(), price) {
                                            leptos::logging::warn!("add failed: {}", e);
                                        }
                                    });
                                }
                            >
                                "Adicionar"
                            </button>
                        </div>
                    </article>
                </RevealOnScroll>
            })
        })
        .collect_view();

    view! {
        <section class="cardapio" id="cardapio">
            <div class="container">
                <h2 class="section-title">"Cardápio"</h2>
                <div class="cards-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
pub(super) fn FaqSection(faq: Vec<FaqEntry>, scroll: RwSignal<f64>) -> impl IntoView {
    let accordion = RwSignal::new(FaqAccordion::default());

    let items = faq
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            view! {
                <RevealOnScroll scroll=scroll>
                    <div class="faq-item" class:active=move || accordion.get().is_open(index)>
                        <button
                            class="faq-question"
                            on:click=move |_| accordion.update(|a| a.toggle(index))
                        >
                            {entry.question}
                            <span class="faq-icon">"+"</span>
                        </button>
                        <div class="faq-answer">
                            <p>{entry.answer}</p>
                        </div>
                    </div>
                </RevealOnScroll>
            }
        })
        .collect_view();

    view! {
        <section class="faq" id="faq">
            <div class="container">
                <h2 class="section-title">"Perguntas frequentes"</h2>
                <div class="faq-list">{items}</div>
            </div>
        </section>
    }
}

/// Map placeholder that opens Google Maps on click.
#[component]
pub(super) fn MapSection(maps_url: Option<String>) -> impl IntoView {
    let maps_url = StoredValue::new(maps_url);
    let open_map = move || {
        maps_url.with_value(|url| {
            if let Some(url) = url {
                browser::open(url, NEW_TAB);
            }
        });
    };

    view! {
        <section class="localizacao" id="localizacao">
            <div class="container">
                <h2 class="section-title">"Onde estamos"</h2>
                <div
                    class="mapa-placeholder"
                    role="link"
                    tabindex="0"
                    on:click=move |_| open_map()
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if activates_link(&ev.key()) {
                            ev.prevent_default();
                            open_map();
                        }
                    }
                >
                    <span class="mapa-icon">"📍"</span>
                    <p>"Clique para abrir no Google Maps"</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub(super) fn SiteFooter(name: String, contact_href: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-content">
                <p class="footer-brand">{name}</p>
                <a href=contact_href class="footer-whatsapp" target=NEW_TAB rel="noopener">
                    "Fale conosco no WhatsApp"
                </a>
            </div>
        </footer>
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
fn RevealOnScroll(scroll: RwSignal<f64>, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let state = RwSignal::new(interactions::Reveal::default());

    Effect::new(move |_| {
        scroll.track();
        if state.get_untracked().is_revealed() {
            return;
        }
        let Some(el) = node.get() else {
            return;
        };

        let rect = el.get_bounding_client_rect();
        let mut next = state.get_untracked();
        if next.observe(rect.top(), rect.height(), browser::viewport_height()) {
            state.set(next);
        }
    });

    view! {
        <div class="reveal" node_ref=node style=move || state.get().style()>
            {children()}
        </div>
    }
}
