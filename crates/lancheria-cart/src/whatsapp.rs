//! WhatsApp order messages and deep links.
//!
//! The message layout is the contract with the person reading the order on
//! the other side of the chat:
//!
//! ```text
//! Olá! Gostaria de fazer o seguinte pedido:
//! - X-Burger - R$ 10.50
//! - Suco - R$ 4.25
//!
//! Total: R$ 14.75
//! ```

use url::form_urlencoded::byte_serialize;
use url::{ParseError, Url};

use crate::cart::Cart;
use crate::error::CartError;

const HTTPS: &str = "https://";
const WA_ME_BASE: &str = "https://wa.me/";
const WA_ME_HOST: &str = "wa.me";
const WA_ME_BARE: &str = "wa.me/";
const TEXT_PARAM: &str = "text";
const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Browsing context the page opens external links in.
pub const NEW_TAB: &str = "_blank";

/// A ready-to-open checkout link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLink {
    url: String,
    message: String,
}

impl CheckoutLink {
    pub(crate) fn new(url: String, message: String) -> Self {
        Self { url, message }
    }

    /// The encoded `wa.me` URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The plain-text message carried in the URL.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Window target for `window.open`.
    pub fn target(&self) -> &'static str {
        NEW_TAB
    }
}

/// Compose the plain-text order message for a cart.
pub fn order_message(cart: &Cart, greeting: &str) -> String {
    let mut message = String::from(greeting);
    message.push('\n');

    for item in cart.items() {
        message.push_str(&format!("- {}\n", item.label()));
    }

    message.push_str(&format!("\nTotal: {}", cart.total().display()));
    message
}

/// Build `https://wa.me/<number>?text=<encoded text>`.
pub fn deep_link(number: &str, text: &str) -> Result<String, CartError> {
    let mut url = Url::parse(WA_ME_BASE)?.join(number)?;
    append_text(&mut url, text);
    Ok(url.into())
}

/// Give a `wa.me` anchor a pre-filled message if it has none.
///
/// Scheme-less `wa.me/...` hrefs are handled and keep their form. Links to
/// other hosts, links that already carry `text=`, and hrefs that do not
/// parse are returned unchanged.
pub fn with_default_message(href: &str, message: &str) -> String {
    let (mut url, bare) = match Url::parse(href) {
        Ok(url) => (url, false),
        Err(ParseError::RelativeUrlWithoutBase) if href.starts_with(WA_ME_BARE) => {
            match Url::parse(&format!("{}{}", HTTPS, href)) {
                Ok(url) => (url, true),
                Err(_) => return href.to_string(),
            }
        }
        Err(_) => return href.to_string(),
    };

    if url.host_str() != Some(WA_ME_HOST) {
        return href.to_string();
    }

    if url.query_pairs().any(|(key, _)| key == TEXT_PARAM) {
        return href.to_string();
    }

    append_text(&mut url, message);
    let updated = url.as_str();
    if bare {
        updated.strip_prefix(HTTPS).unwrap_or(updated).to_string()
    } else {
        updated.to_string()
    }
}

/// Percent-encode message text. Spaces become `%20`, never `+`.
pub fn encode_text(text: &str) -> String {
    // byte_serialize writes a literal '+' as %2B, so every '+' left is a space
    byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn append_text(url: &mut Url, text: &str) {
    let pair = format!("{}={}", TEXT_PARAM, encode_text(text));
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{}&{}", existing, pair),
        _ => pair,
    };
    url.set_query(Some(&query));
}

/// Build a Google Maps search URL for a free-text address.
pub fn maps_search_url(query: &str) -> Result<String, CartError> {
    let url = Url::parse_with_params(MAPS_SEARCH_BASE, &[("api", "1"), ("query", query)])?;
    Ok(url.into())
}
