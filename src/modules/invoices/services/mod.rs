mod confirm;
mod currency_change;
mod item_collection;
mod totals;

pub use confirm::{AutoApprove, ConversionPrompt};
pub use currency_change::{ChangeOutcome, CurrencyChangeOrchestrator};
pub use item_collection::{DraftPayload, ItemCollectionService, ItemPayload};
pub use totals::{Totals, TotalsAggregator};
