// Invoice draft module

pub mod models;
pub mod services;

pub use models::{compute_line_total, InvoiceDraft, LineItem, LineItemFields};
pub use services::{
    AutoApprove, ChangeOutcome, ConversionPrompt, CurrencyChangeOrchestrator, DraftPayload,
    ItemCollectionService, ItemPayload, Totals, TotalsAggregator,
};
