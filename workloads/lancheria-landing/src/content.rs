//! Store content bundled with the page.

use lancheria_cart::config::StoreConfig;

/// The `store.toml` shipped with the bundle.
pub const STORE_TOML: &str = include_str!("../store.toml");

/// Load the bundled store content.
///
/// A broken document falls back to the built-in defaults so the page still
/// renders.
pub fn store_config() -> StoreConfig {
    match StoreConfig::from_toml_str(STORE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "bundled store.toml rejected, using defaults");
            StoreConfig::default()
        }
    }
}

/// Section anchors used by the navigation menu, in page order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("inicio", "Início"),
    ("cardapio", "Cardápio"),
    ("faq", "Dúvidas"),
    ("localizacao", "Localização"),
];
