pub mod currency;
pub mod error;

pub use currency::{format_grouped, round2, Currency};
pub use error::{AppError, Result};
