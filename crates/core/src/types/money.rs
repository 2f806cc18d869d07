//! Decimal money helpers.
//!
//! All monetary amounts are `rust_decimal::Decimal` in the currency's
//! standard unit (e.g., dollars, not cents). Display formatting is always
//! two decimal places; arithmetic is exact and never goes through floats.

use rust_decimal::{Decimal, RoundingStrategy};

/// Line total for a cart or order line: unit price times quantity.
#[must_use]
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

/// Format an amount for display with exactly two decimal places.
///
/// Midpoints round away from zero (2.005 -> "2.01").
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        // 9.99 * 2 = 19.98
        let unit_price = Decimal::new(999, 2);
        assert_eq!(line_total(unit_price, 2), Decimal::new(1998, 2));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        assert_eq!(line_total(Decimal::new(999, 2), 0), Decimal::ZERO);
    }

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(format_amount(Decimal::new(5, 0)), "5.00");
        assert_eq!(format_amount(Decimal::new(51, 1)), "5.10");
    }

    #[test]
    fn test_format_amount_rounds_midpoint_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(2005, 3)), "2.01");
    }

    #[test]
    fn test_format_amount_exact() {
        assert_eq!(format_amount(Decimal::new(1998, 2)), "19.98");
    }
}
