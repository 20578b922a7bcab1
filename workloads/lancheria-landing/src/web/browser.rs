//! Thin wrappers over the browser APIs the page touches.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Node, ScrollBehavior, ScrollToOptions};

use lancheria_cart::whatsapp::with_default_message;
use lancheria_cart::LineItemId;

use crate::interactions::{anchor_id, anchor_scroll_target};

/// Open a URL in the given browsing context.
pub(super) fn open(url: &str, target: &str) {
    if let Err(e) = window().open_with_url_and_target(url, target) {
        leptos::logging::warn!("window.open failed for {}: {:?}", url, e);
    }
}

/// Blocking user notification.
pub(super) fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        leptos::logging::warn!("alert failed: {:?}", e);
    }
}

/// Current vertical scroll offset.
pub(super) fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Height of the viewport in CSS pixels.
pub(super) fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Whether an event's target sits inside `container`.
pub(super) fn contains_target(container: &Element, ev: &Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Id of the cart row whose remove button was clicked, if any.
pub(super) fn clicked_item_id(ev: &Event) -> Option<LineItemId> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest("[data-item-id]").ok()??;
    button.get_attribute("data-item-id")?.parse().ok()
}

/// Smooth-scroll to the element an in-page link points at, leaving room
/// for the fixed header.
pub(super) fn scroll_to_anchor(ev: &Event, href: &str) {
    let Some(id) = anchor_id(href) else {
        return;
    };
    ev.prevent_default();

    let Some(target) = html_element(document().get_element_by_id(id)) else {
        return;
    };
    let header_height = html_element(document().query_selector(".header").ok().flatten())
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0);

    if let Some(top) = anchor_scroll_target(href, target.offset_top() as f64, header_height) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// Add the default greeting to every `wa.me` anchor in the document that
/// has none. Returns how many links changed.
pub(super) fn prefill_whatsapp_links(message: &str) -> usize {
    let Ok(links) = document().query_selector_all(r#"a[href*="wa.me"]"#) else {
        return 0;
    };

    let mut changed = 0;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(href) = link.get_attribute("href") else {
            continue;
        };

        let updated = with_default_message(&href, message);
        if updated != href && link.set_attribute("href", &updated).is_ok() {
            changed += 1;
        }
    }
    changed
}

fn html_element(el: Option<Element>) -> Option<HtmlElement> {
    el?.dyn_into::<HtmlElement>().ok()
}
