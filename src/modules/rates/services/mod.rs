mod http_provider;
mod rate_provider;
mod rate_service;

pub use http_provider::HttpRateProvider;
pub use rate_provider::RateProvider;
pub use rate_service::RateService;
