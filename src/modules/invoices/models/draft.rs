use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::currency::Currency;

use super::line_item::LineItem;

/// The in-progress invoice form state
///
/// Invariant: when any line has a positive unit price the payment amount is
/// derived from the lines and the field is read-only; otherwise it holds
/// whatever the user typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Ordered rows; order is display and submission order
    pub line_items: Vec<LineItem>,

    /// The invoice's total charge, derived or manually entered
    pub payment_amount: Decimal,

    /// Whether the payment amount field accepts manual entry
    pub payment_amount_editable: bool,

    /// Single source of truth for every row's currency
    pub payment_currency: Currency,

    /// Free text, independent of line items
    pub note: String,
}

impl InvoiceDraft {
    pub fn new(payment_currency: Currency) -> Self {
        Self {
            line_items: Vec::new(),
            payment_amount: Decimal::ZERO,
            payment_amount_editable: true,
            payment_currency,
            note: String::new(),
        }
    }

    pub fn item(&self, id: Uuid) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut LineItem> {
        self.line_items.iter_mut().find(|item| item.id == id)
    }

    /// True when at least one row carries a positive price, which switches
    /// the payment amount to derived/read-only.
    pub fn has_nonzero_prices(&self) -> bool {
        self.line_items
            .iter()
            .any(|item| item.unit_price > Decimal::ZERO)
    }
}
