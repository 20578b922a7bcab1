//! Money type for representing prices.
//!
//! Uses centavo-based integer representation so that repeated adds and
//! removes never accumulate floating-point error in the total.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol used on the page and in order messages.
pub const CURRENCY_SYMBOL: &str = "R$";

const DECIMAL_PLACES: u32 = 2;

/// A monetary value in Brazilian reais.
///
/// Amounts are stored in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in centavos.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from centavos.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// Returns `None` for NaN, infinities and amounts whose centavos do not
    /// fit in an `i64`.
    ///
    /// ```
    /// use lancheria_cart::money::Money;
    /// let price = Money::from_decimal(24.9).unwrap();
    /// assert_eq!(price.amount_cents, 2490);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        let multiplier = 10_i64.pow(DECIMAL_PLACES);
        let cents = (amount * multiplier as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(cents as i64))
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(DECIMAL_PLACES);
        self.amount_cents as f64 / divisor as f64
    }

    /// Format with two decimals and no symbol (e.g., "10.50").
    ///
    /// Works on the integer amount, so values like 0.125 never round
    /// differently from the stored centavos.
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Format as a display string (e.g., "R$ 10.50").
    pub fn display(&self) -> String {
        format!("{} {}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Checked addition.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
