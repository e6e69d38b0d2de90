use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::core::currency::{round2, Currency};
use crate::modules::rates::models::RatePair;

use super::rate_provider::RateProvider;

/// Memoizing facade over a [`RateProvider`].
///
/// Rates are fetched at most once per (from, to) pair and cached for the
/// life of the service; a form session accepts that staleness. The cache
/// is per-instance, never global.
pub struct RateService {
    provider: Arc<dyn RateProvider>,
    cache: Mutex<HashMap<RatePair, Decimal>>,
}

impl RateService {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self {
            provider,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the rate for a pair.
    ///
    /// The identity pair is 1 by definition and never hits the network.
    /// A fetch failure degrades to the identity rate with a logged warning
    /// so a conversion can never block form submission; failures are not
    /// cached, so the next request retries.
    pub async fn get_rate(&self, from: Currency, to: Currency) -> Decimal {
        if from == to {
            return Decimal::ONE;
        }

        let pair = RatePair::new(from, to);
        if let Some(rate) = self.cache.lock().await.get(&pair).copied() {
            return rate;
        }

        match self.provider.fetch_rate(from, to).await {
            Ok(rate) => {
                debug!(%from, %to, %rate, "exchange rate fetched");
                self.cache.lock().await.insert(pair, rate);
                rate
            }
            Err(error) => {
                warn!(%from, %to, %error, "exchange rate fetch failed, falling back to 1:1");
                Decimal::ONE
            }
        }
    }

    /// Convert an amount between currencies, rounded to cents.
    /// The identity pair returns the amount untouched.
    pub async fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Decimal {
        if from == to {
            return amount;
        }
        round2(amount * self.get_rate(from, to).await)
    }
}
