//! Cart invariants checked across operation sequences.

use lancheria_cart::prelude::*;

/// Small deterministic generator so the sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn sum_of_items(cart: &Cart) -> i64 {
    cart.items().iter().map(|i| i.price.amount_cents).sum()
}

#[test]
fn total_matches_sum_across_random_sequences() {
    for seed in 0..50 {
        let mut rng = Lcg(seed);
        let mut cart = Cart::new();

        for step in 0..200 {
            let len_before = cart.len();
            let total_before = cart.total();

            if rng.next() % 3 == 0 && !cart.is_empty() {
                let index = (rng.next() as usize) % cart.len();
                let removed = cart.remove_at(index).unwrap();
                assert_eq!(cart.len(), len_before - 1);
                assert_eq!(
                    cart.total().amount_cents,
                    total_before.amount_cents - removed.price.amount_cents
                );
            } else {
                let price = Money::new((rng.next() % 5000) as i64);
                cart.add(format!("item {}", step), price).unwrap();
                assert_eq!(cart.len(), len_before + 1);
                assert!(cart.total() >= total_before);
            }

            assert_eq!(cart.total().amount_cents, sum_of_items(&cart));
        }
    }
}

#[test]
fn invalid_index_changes_nothing() {
    let mut cart = Cart::new();
    cart.add("A", Money::new(100)).unwrap();
    let before = cart.clone();

    for index in [1, 2, usize::MAX] {
        assert_eq!(
            cart.remove_at(index),
            Err(CartError::OutOfRange { index, len: 1 })
        );
    }
    assert_eq!(cart, before);
}

#[test]
fn ids_stay_unique_through_removals() {
    let mut cart = Cart::new();
    let mut seen = Vec::new();

    for round in 0..20 {
        seen.push(cart.add("A", Money::new(100)).unwrap());
        seen.push(cart.add("B", Money::new(200)).unwrap());
        if round % 2 == 0 {
            cart.remove_at(0).unwrap();
        }
    }

    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), seen.len());
}

#[test]
fn render_is_idempotent_between_mutations() {
    let mut cart = Cart::new();
    for price in [100, 250, 999] {
        cart.add("Lanche", Money::new(price)).unwrap();
        let first = cart.render();
        assert_eq!(first, cart.render());
        assert_eq!(first.total, cart.total().display_amount());
    }
}

#[test]
fn empty_checkout_signals_and_builds_no_link() {
    let cart = Cart::new();
    assert_eq!(
        cart.checkout(&WhatsAppSettings::default()),
        Err(CartError::EmptyCart)
    );
}

#[test]
fn add_remove_checkout_scenario() {
    let mut cart = Cart::new();
    cart.add("X", Money::from_decimal(10.5).unwrap()).unwrap();
    cart.add("Y", Money::from_decimal(4.25).unwrap()).unwrap();
    assert_eq!(cart.total().display_amount(), "14.75");

    cart.remove_at(0).unwrap();
    assert_eq!(cart.total().display_amount(), "4.25");
    let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Y"]);

    let link = cart.checkout(&WhatsAppSettings::default()).unwrap();
    let item_lines: Vec<&str> = link
        .message()
        .lines()
        .filter(|line| line.starts_with("- "))
        .collect();
    assert_eq!(item_lines, vec!["- Y - R$ 4.25"]);
    assert!(link.message().ends_with("\n\nTotal: R$ 4.25"));
    assert!(link.url().starts_with("https://wa.me/5511999999999?text="));
    assert!(!link.url().contains('\n'));
}

#[test]
fn checkout_uses_configured_contact() {
    let config = StoreConfig::from_toml_str(
        r#"
[whatsapp]
number = "5521988887777"
order_greeting = "Pedido novo:"
"#,
    )
    .unwrap();

    let mut cart = Cart::new();
    let entry = &config.menu[0];
    cart.add(entry.name.clone(), entry.money().unwrap()).unwrap();

    let link = cart.checkout(&config.whatsapp).unwrap();
    assert!(link.url().starts_with("https://wa.me/5521988887777?text="));
    assert!(link.message().starts_with("Pedido novo:\n- X-Burger - R$ 18.50\n"));
}

#[test]
fn huge_prices_are_rejected_instead_of_overflowing() {
    let mut cart = Cart::new();
    let huge = Money::from_decimal(5e16).unwrap();
    cart.add("A", huge).unwrap();
    assert_eq!(cart.add("B", huge), Err(CartError::Overflow));
    assert_eq!(cart.len(), 1);

    // the cart is still usable end to end
    assert_eq!(cart.render().total, huge.display_amount());
    let link = cart.checkout(&WhatsAppSettings::default()).unwrap();
    assert!(link.message().ends_with(&format!("Total: {}", huge.display())));
}
