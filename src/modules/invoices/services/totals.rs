use rust_decimal::Decimal;

use crate::core::currency::round2;
use crate::modules::invoices::models::InvoiceDraft;

/// Outcome of an aggregation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub payment_amount: Decimal,
    pub editable: bool,
}

/// Resums line totals into the invoice payment amount and decides whether
/// the field is user-editable. Must run after every row add/remove/
/// duplicate and every quantity/price/tax edit; line totals are refreshed
/// first so aggregation always sees current values.
pub struct TotalsAggregator;

impl TotalsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Recompute the invoice totals from its rows.
    ///
    /// When any row carries a positive price the payment amount becomes
    /// derived and read-only. Otherwise the field stays editable and its
    /// manual value is left untouched. Calling this twice with no
    /// intervening edits yields the same result.
    pub fn recompute(&self, draft: &mut InvoiceDraft) -> Totals {
        for item in &mut draft.line_items {
            item.recompute_total();
        }

        let total: Decimal = draft
            .line_items
            .iter()
            .map(|item| item.total_with_tax)
            .sum();
        let total = round2(total);

        if draft.has_nonzero_prices() {
            draft.payment_amount = total;
            draft.payment_amount_editable = false;
        } else {
            draft.payment_amount_editable = true;
        }

        Totals {
            payment_amount: draft.payment_amount,
            editable: draft.payment_amount_editable,
        }
    }
}

impl Default for TotalsAggregator {
    fn default() -> Self {
        Self::new()
    }
}
