mod draft;
mod line_item;

pub use draft::InvoiceDraft;
pub use line_item::{coerce_non_negative, compute_line_total, LineItem, LineItemFields};
