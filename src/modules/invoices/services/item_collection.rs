// Owns the ordered collection of form rows: add/remove/duplicate/update,
// transport serialization, and rehydration from persisted "old" values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::core::currency::Currency;
use crate::modules::invoices::models::{
    coerce_non_negative, InvoiceDraft, LineItem, LineItemFields,
};

use super::totals::TotalsAggregator;

/// One row of the submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub price: Decimal,
    pub tax: Decimal,
    pub price_complete: Decimal,
}

/// Submission payload for the whole draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPayload {
    pub items: Vec<ItemPayload>,
    pub note: String,
}

/// Service for line-item collection operations
pub struct ItemCollectionService {
    aggregator: TotalsAggregator,
}

impl ItemCollectionService {
    pub fn new() -> Self {
        Self {
            aggregator: TotalsAggregator::new(),
        }
    }

    /// Append a new row and refresh totals. Returns the new row's id.
    pub fn add_item(&self, draft: &mut InvoiceDraft, fields: LineItemFields) -> Uuid {
        let item = LineItem::new(fields, draft.payment_currency);
        let id = item.id;
        draft.line_items.push(item);
        self.aggregator.recompute(draft);
        id
    }

    /// Remove a row and refresh totals. No-op if the id is unknown.
    pub fn remove_item(&self, draft: &mut InvoiceDraft, id: Uuid) {
        let before = draft.line_items.len();
        draft.line_items.retain(|item| item.id != id);
        if draft.line_items.len() != before {
            self.aggregator.recompute(draft);
        }
    }

    /// Clone a row's user-entered fields into a new row appended at the
    /// end. Returns the new row's id, or None if the source is unknown.
    pub fn duplicate_item(&self, draft: &mut InvoiceDraft, id: Uuid) -> Option<Uuid> {
        let copy = draft.item(id)?.duplicate();
        let new_id = copy.id;
        draft.line_items.push(copy);
        self.aggregator.recompute(draft);
        Some(new_id)
    }

    /// Apply edited field values to a row, then refresh totals.
    /// No-op if the id is unknown.
    pub fn update_item(&self, draft: &mut InvoiceDraft, id: Uuid, fields: LineItemFields) {
        let Some(item) = draft.item_mut(id) else {
            return;
        };
        item.apply(fields);
        self.aggregator.recompute(draft);
    }

    /// Serialize the draft for submission.
    ///
    /// Rows left entirely blank are silently dropped; a row with only a
    /// price, only a quantity, or only a name survives.
    pub fn serialize(&self, draft: &InvoiceDraft) -> DraftPayload {
        let items = draft
            .line_items
            .iter()
            .filter(|item| !item.is_blank())
            .map(|item| ItemPayload {
                name: item.name.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
                price: item.unit_price,
                tax: item.tax_rate_percent,
                price_complete: item.total_with_tax,
            })
            .collect();

        DraftPayload {
            items,
            note: draft.note.clone(),
        }
    }

    /// Rehydrate a draft from a previously serialized payload.
    ///
    /// Accepts either a bare row array or an object with an `items` array;
    /// numeric fields may arrive as JSON numbers or strings. Absent,
    /// unusable, or empty input falls back to a single default row - the
    /// form never starts with zero rows.
    pub fn load(&self, payload: Option<&Value>, currency: Currency) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new(currency);

        if let Some(Value::Object(map)) = payload {
            if let Some(note) = map.get("note").and_then(Value::as_str) {
                draft.note = note.to_string();
            }
        }

        match payload.and_then(extract_rows) {
            Some(rows) if !rows.is_empty() => {
                for row in rows {
                    draft.line_items.push(rehydrate_row(row, currency));
                }
            }
            _ => {
                if payload.is_some() {
                    warn!("unusable line item payload, falling back to a single empty row");
                }
                draft
                    .line_items
                    .push(LineItem::new(LineItemFields::default(), currency));
            }
        }

        self.aggregator.recompute(&mut draft);
        draft
    }
}

impl Default for ItemCollectionService {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_rows(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(rows) => Some(rows),
        Value::Object(map) => match map.get("items") {
            Some(Value::Array(rows)) => Some(rows),
            _ => None,
        },
        _ => None,
    }
}

fn rehydrate_row(row: &Value, currency: Currency) -> LineItem {
    LineItem::new(
        LineItemFields {
            name: string_field(row, "name"),
            quantity: decimal_field(row, "quantity"),
            unit: string_field(row, "unit"),
            unit_price: decimal_field(row, "price"),
            tax_rate_percent: decimal_field(row, "tax"),
        },
        currency,
    )
}

fn string_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Lenient numeric read: numbers and numeric strings pass through,
/// anything else (missing, null, garbage) lands at zero.
fn decimal_field(row: &Value, key: &str) -> Decimal {
    let parsed = match row.get(key) {
        Some(Value::Number(n)) => n.to_string().parse::<Decimal>().ok(),
        Some(Value::String(s)) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };
    coerce_non_negative(parsed.unwrap_or(Decimal::ZERO))
}
