use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::core::currency::Currency;
use crate::modules::invoices::models::InvoiceDraft;
use crate::modules::rates::RateService;

use super::confirm::ConversionPrompt;
use super::totals::TotalsAggregator;

/// Result of a currency change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Selected currency equals the current one; nothing to do
    Unchanged,

    /// A conversion is already in flight; this trigger was ignored
    Busy,

    /// The user declined; the draft was not touched
    Rejected,

    /// All amounts were rewritten in the new currency
    Converted,
}

/// Runs the confirm-and-convert transition when the payment currency
/// changes.
///
/// Conversion uses each row's own last-known currency as its source, so a
/// change triggered from one row cannot double-convert rows already stored
/// in a different currency. A rate fetch failure falls back to 1:1 for
/// that one value and the transition still completes; the orchestrator
/// always returns to idle.
pub struct CurrencyChangeOrchestrator {
    rates: Arc<RateService>,
    prompt: Arc<dyn ConversionPrompt>,
    aggregator: TotalsAggregator,
    converting: AtomicBool,
}

impl CurrencyChangeOrchestrator {
    pub fn new(rates: Arc<RateService>, prompt: Arc<dyn ConversionPrompt>) -> Self {
        Self {
            rates,
            prompt,
            aggregator: TotalsAggregator::new(),
            converting: AtomicBool::new(false),
        }
    }

    /// True while a conversion is in flight; the UI disables currency
    /// selectors for the duration.
    pub fn is_converting(&self) -> bool {
        self.converting.load(Ordering::Acquire)
    }

    pub async fn change_currency(
        &self,
        draft: &mut InvoiceDraft,
        new_currency: Currency,
    ) -> ChangeOutcome {
        let current = draft.payment_currency;
        if new_currency == current {
            return ChangeOutcome::Unchanged;
        }

        // Re-entrancy guard: a second trigger while converting is ignored
        if self.converting.swap(true, Ordering::AcqRel) {
            return ChangeOutcome::Busy;
        }
        let _guard = ConvertingGuard(&self.converting);

        if !self.prompt.confirm(current, new_currency).await {
            debug!(from = %current, to = %new_currency, "currency change declined");
            return ChangeOutcome::Rejected;
        }

        if draft.payment_amount_editable {
            draft.payment_amount = self
                .rates
                .convert(draft.payment_amount, current, new_currency)
                .await;
        }

        for item in &mut draft.line_items {
            let source = item.currency;
            item.unit_price = self.rates.convert(item.unit_price, source, new_currency).await;
            item.currency = new_currency;
            item.recompute_total();
        }

        draft.payment_currency = new_currency;
        self.aggregator.recompute(draft);

        debug!(from = %current, to = %new_currency, "currency change applied");
        ChangeOutcome::Converted
    }
}

struct ConvertingGuard<'a>(&'a AtomicBool);

impl Drop for ConvertingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
