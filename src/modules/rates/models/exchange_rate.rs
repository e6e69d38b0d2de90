use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::currency::Currency;

/// Cache key: an ordered (from, to) currency pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatePair {
    pub from: Currency,
    pub to: Currency,
}

impl RatePair {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }
}

/// Wire shape of the exchange-rate endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateResponse {
    pub rate: Decimal,
}
