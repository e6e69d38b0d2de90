// Property-based tests for line total calculation
//
// Properties tested:
// 1. total = round2(quantity * unit_price * (1 + tax_rate/100))
// 2. total is always non-negative
// 3. zero quantity or zero price produces a zero total
// 4. negative inputs clamp to zero instead of failing

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use invoicekit::invoices::compute_line_total;

fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

proptest! {
    /// Property: total matches the formula with 2-decimal rounding
    #[test]
    fn test_line_total_formula(
        quantity in 0u32..=10_000,
        price_cents in 0u64..=1_000_000,
        tax_basis_points in 0u32..=10_000
    ) {
        let quantity = Decimal::from(quantity);
        let unit_price = Decimal::new(price_cents as i64, 2);
        let tax_rate = Decimal::new(tax_basis_points as i64, 2);

        let total = compute_line_total(quantity, unit_price, tax_rate);
        let expected = round2(
            quantity * unit_price * (Decimal::ONE + tax_rate / Decimal::ONE_HUNDRED),
        );

        prop_assert_eq!(total, expected,
            "formula mismatch: quantity={}, price={}, tax={}",
            quantity, unit_price, tax_rate);
    }

    /// Property: total is never negative
    #[test]
    fn test_line_total_non_negative(
        quantity in 0u32..=10_000,
        price_cents in 0u64..=1_000_000,
        tax_basis_points in 0u32..=10_000
    ) {
        let total = compute_line_total(
            Decimal::from(quantity),
            Decimal::new(price_cents as i64, 2),
            Decimal::new(tax_basis_points as i64, 2),
        );

        prop_assert!(total >= Decimal::ZERO, "negative total: {}", total);
    }

    /// Property: zero quantity produces zero total
    #[test]
    fn test_zero_quantity_zero_total(
        price_cents in 0u64..=1_000_000,
        tax_basis_points in 0u32..=10_000
    ) {
        let total = compute_line_total(
            Decimal::ZERO,
            Decimal::new(price_cents as i64, 2),
            Decimal::new(tax_basis_points as i64, 2),
        );

        prop_assert_eq!(total, Decimal::ZERO);
    }

    /// Property: zero tax means total is just quantity * price
    #[test]
    fn test_zero_tax_is_plain_product(
        quantity in 0u32..=10_000,
        price_cents in 0u64..=1_000_000
    ) {
        let quantity = Decimal::from(quantity);
        let unit_price = Decimal::new(price_cents as i64, 2);

        let total = compute_line_total(quantity, unit_price, Decimal::ZERO);
        prop_assert_eq!(total, round2(quantity * unit_price));
    }

    /// Property: negative inputs never escape the zero clamp
    #[test]
    fn test_negative_inputs_clamp(
        quantity in -10_000i32..0,
        price_cents in 0u64..=1_000_000
    ) {
        let total = compute_line_total(
            Decimal::from(quantity),
            Decimal::new(price_cents as i64, 2),
            Decimal::ZERO,
        );

        prop_assert_eq!(total, Decimal::ZERO);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_standard_tax_case() {
        // 2 * 100 at 21% = 242.00
        let total = compute_line_total(Decimal::from(2), Decimal::from(100), Decimal::from(21));
        assert_eq!(total, Decimal::from_str("242.00").unwrap());
    }

    #[test]
    fn test_fractional_rounding() {
        // 3 * 33.33 at 10% = 109.9890 -> 109.99
        let total = compute_line_total(
            Decimal::from(3),
            Decimal::from_str("33.33").unwrap(),
            Decimal::from(10),
        );
        assert_eq!(total, Decimal::from_str("109.99").unwrap());
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 1 * 0.05 at 50% = 0.075 -> 0.08
        let total = compute_line_total(
            Decimal::ONE,
            Decimal::from_str("0.05").unwrap(),
            Decimal::from(50),
        );
        assert_eq!(total, Decimal::from_str("0.08").unwrap());
    }

    #[test]
    fn test_fractional_quantity() {
        // 2.5 * 100 at 0% = 250
        let total = compute_line_total(
            Decimal::from_str("2.5").unwrap(),
            Decimal::from(100),
            Decimal::ZERO,
        );
        assert_eq!(total, Decimal::from(250));
    }
}
