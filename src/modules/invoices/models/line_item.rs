// A line item is one row of the invoice form. Each row keeps its own
// last-known currency so a currency change can convert every row from the
// currency it was actually priced in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::currency::{round2, Currency};

/// Clamps the lenient numeric policy: negative values collapse to zero,
/// the same way unparseable input does at the form boundary.
pub fn coerce_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}

/// Tax-inclusive total for one row.
///
/// Formula: round2(quantity × unit_price × (1 + tax_rate_percent / 100))
///
/// Never fails; out-of-range inputs are clamped rather than rejected so the
/// form stays computable.
pub fn compute_line_total(
    quantity: Decimal,
    unit_price: Decimal,
    tax_rate_percent: Decimal,
) -> Decimal {
    let quantity = coerce_non_negative(quantity);
    let unit_price = coerce_non_negative(unit_price);
    let tax_rate = coerce_non_negative(tax_rate_percent);

    let multiplier = Decimal::ONE + tax_rate / Decimal::ONE_HUNDRED;
    round2(quantity * unit_price * multiplier)
}

/// User-entered field values for creating or editing a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemFields {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub tax_rate_percent: Decimal,
}

impl Default for LineItemFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: Decimal::ONE,
            unit: String::new(),
            unit_price: Decimal::ZERO,
            tax_rate_percent: Decimal::ZERO,
        }
    }
}

/// Represents a single row in an invoice draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier for the row
    pub id: Uuid,

    /// Description of the product or service
    pub name: String,

    /// Quantity of items
    pub quantity: Decimal,

    /// Free-form unit label (e.g. "pcs")
    pub unit: String,

    /// Price per unit in this row's currency
    pub unit_price: Decimal,

    /// Tax rate in percent (21 means 21%)
    pub tax_rate_percent: Decimal,

    /// Last-known currency for this row; rewritten only by the currency
    /// change orchestrator, never set independently by the user
    pub currency: Currency,

    /// Cached tax-inclusive total; recomputed on every numeric edit,
    /// never an independent source of truth
    pub total_with_tax: Decimal,
}

impl LineItem {
    /// Create a new row from field values, coercing numerics and
    /// calculating the total immediately.
    pub fn new(fields: LineItemFields, currency: Currency) -> Self {
        let mut item = Self {
            id: Uuid::new_v4(),
            name: fields.name,
            quantity: coerce_non_negative(fields.quantity),
            unit: fields.unit,
            unit_price: coerce_non_negative(fields.unit_price),
            tax_rate_percent: coerce_non_negative(fields.tax_rate_percent),
            currency,
            total_with_tax: Decimal::ZERO,
        };
        item.recompute_total();
        item
    }

    /// Apply edited field values, then refresh the cached total.
    pub fn apply(&mut self, fields: LineItemFields) {
        self.name = fields.name;
        self.quantity = coerce_non_negative(fields.quantity);
        self.unit = fields.unit;
        self.unit_price = coerce_non_negative(fields.unit_price);
        self.tax_rate_percent = coerce_non_negative(fields.tax_rate_percent);
        self.recompute_total();
    }

    /// Refresh the cached tax-inclusive total.
    pub fn recompute_total(&mut self) {
        self.total_with_tax =
            compute_line_total(self.quantity, self.unit_price, self.tax_rate_percent);
    }

    /// Copy the user-entered fields into a fresh row. The id is not copied.
    pub fn duplicate(&self) -> Self {
        Self::new(
            LineItemFields {
                name: self.name.clone(),
                quantity: self.quantity,
                unit: self.unit.clone(),
                unit_price: self.unit_price,
                tax_rate_percent: self.tax_rate_percent,
            },
            self.currency,
        )
    }

    /// A row the user never filled in: no name, no quantity, no price.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.quantity.is_zero() && self.unit_price.is_zero()
    }
}
