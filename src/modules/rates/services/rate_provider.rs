use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::core::currency::Currency;
use crate::core::Result;

/// Port for resolving exchange rates from a remote source
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the multiplicative rate converting `from` amounts into `to`.
    async fn fetch_rate(&self, from: Currency, to: Currency) -> Result<Decimal>;
}
