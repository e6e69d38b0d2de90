// Exchange rates module

pub mod models;
pub mod services;

pub use models::{ExchangeRateResponse, RatePair};
pub use services::{HttpRateProvider, RateProvider, RateService};
