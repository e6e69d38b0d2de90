use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use rust_decimal::Decimal;

use crate::config::RatesConfig;
use crate::core::currency::Currency;
use crate::core::{AppError, Result};
use crate::modules::rates::models::ExchangeRateResponse;

use super::rate_provider::RateProvider;

/// Exchange-rate client for the `/api/currencies/exchange-rate` endpoint
pub struct HttpRateProvider {
    client: ClientWithMiddleware,
    base_url: String,
}

impl HttpRateProvider {
    pub fn new(config: &RatesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn fetch_rate(&self, from: Currency, to: Currency) -> Result<Decimal> {
        let url = format!("{}/api/currencies/exchange-rate", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("from", from.as_str()), ("to", to.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::rate_fetch(format!(
                "exchange rate endpoint returned {}: {}",
                status, body
            )));
        }

        let payload: ExchangeRateResponse = response.json().await.map_err(|e| {
            AppError::rate_fetch(format!("failed to parse exchange rate response: {}", e))
        })?;

        if payload.rate <= Decimal::ZERO {
            return Err(AppError::rate_fetch(format!(
                "non-positive rate {} for {}->{}",
                payload.rate, from, to
            )));
        }

        Ok(payload.rate)
    }
}
