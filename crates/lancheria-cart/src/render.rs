//! Render projection of a cart.
//!
//! `Cart::render` is a pure function of the cart. The browser bundle binds
//! the resulting view to the list, the total and the floating badge.

use serde::Serialize;

use crate::cart::Cart;
use crate::ids::LineItemId;

/// One rendered row of the cart list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    /// Stable id carried by the row's remove control.
    pub id: LineItemId,
    /// Current position in the cart.
    pub index: usize,
    pub name: String,
    /// Price with two decimals, no symbol.
    pub price: String,
    /// Row text, same as the order message line.
    pub label: String,
}

/// Everything the page shows about the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    /// Total with two decimals, no symbol.
    pub total: String,
    /// Whether the floating cart indicator is shown.
    pub indicator_visible: bool,
    pub item_count: usize,
}

impl Cart {
    /// Project the cart into its visual form.
    pub fn render(&self) -> CartView {
        let rows = self
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                id: item.id,
                index,
                name: item.name.clone(),
                price: item.price.display_amount(),
                label: item.label(),
            })
            .collect();

        CartView {
            rows,
            total: self.total().display_amount(),
            indicator_visible: !self.is_empty(),
            item_count: self.len(),
        }
    }
}

impl CartView {
    /// Render the list items as HTML.
    pub fn to_html(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                format!(
                    r#"<li data-index="{}">{} <button class="cart-remove" data-item-id="{}" aria-label="Remover {}">❌</button></li>"#,
                    row.index,
                    html_escape(&row.label),
                    row.id,
                    html_escape(&row.name)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Badge style for the floating indicator.
    pub fn indicator_display(&self) -> &'static str {
        if self.indicator_visible {
            "block"
        } else {
            "none"
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_render_empty() {
        let view = Cart::new().render();
        assert!(view.rows.is_empty());
        assert_eq!(view.total, "0.00");
        assert!(!view.indicator_visible);
        assert_eq!(view.indicator_display(), "none");
        assert_eq!(view.to_html(), "");
    }

    #[test]
    fn test_render_rows() {
        let mut cart = Cart::new();
        let a = cart.add("X-Burger", Money::from_decimal(18.5).unwrap()).unwrap();
        let b = cart.add("Suco", Money::from_decimal(9.5).unwrap()).unwrap();

        let view = cart.render();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].id, a);
        assert_eq!(view.rows[1].index, 1);
        assert_eq!(view.rows[1].id, b);
        assert_eq!(view.rows[0].price, "18.50");
        assert_eq!(view.total, "28.00");
        assert!(view.indicator_visible);
        assert_eq!(view.indicator_display(), "block");
    }

    #[test]
    fn test_render_reindexes_after_removal() {
        let mut cart = Cart::new();
        let a = cart.add("A", Money::new(100)).unwrap();
        let b = cart.add("B", Money::new(200)).unwrap();
        cart.remove_item(&a).unwrap();

        let view = cart.render();
        assert_eq!(view.rows[0].id, b);
        assert_eq!(view.rows[0].index, 0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut cart = Cart::new();
        cart.add("A", Money::new(100)).unwrap();
        assert_eq!(cart.render(), cart.render());
        assert_eq!(cart.render().to_html(), cart.render().to_html());
    }

    #[test]
    fn test_to_html_escapes_names() {
        let mut cart = Cart::new();
        cart.add("<b>Combo</b> & \"Suco\"", Money::new(1000)).unwrap();

        let html = cart.render().to_html();
        assert!(html.contains("&lt;b&gt;Combo&lt;/b&gt; &amp; &quot;Suco&quot; - R$ 10.00"));
        assert!(html.contains(r#"data-item-id="item-1""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_remove_control_id_round_trips() {
        let mut cart = Cart::new();
        cart.add("A", Money::new(100)).unwrap();
        let b = cart.add("B", Money::new(200)).unwrap();

        let view = cart.render();
        assert_eq!(view.rows[1].label, "B - R$ 2.00");

        // the list click handler reads the id back out of the markup
        let html = view.to_html();
        let attr = html
            .lines()
            .nth(1)
            .and_then(|line| line.split(r#"data-item-id=""#).nth(1))
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        let id: LineItemId = attr.parse().unwrap();
        assert_eq!(id, b);
        cart.remove_item(&id).unwrap();
        assert_eq!(cart.render().rows.len(), 1);
    }

    #[test]
    fn test_view_serializes() {
        let mut cart = Cart::new();
        cart.add("A", Money::new(150)).unwrap();
        let json = serde_json::to_value(cart.render()).unwrap();
        assert_eq!(json["total"], "1.50");
        assert_eq!(json["rows"][0]["name"], "A");
        assert_eq!(json["indicator_visible"], true);
    }
}
