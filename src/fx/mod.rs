//! Dashboard plumbing around the chart: money formatting, conversions,
//! amount entry and the exchange-rate payload.

mod board;
mod conversion;
mod currency;
mod history;
mod input;
mod rates;

pub use board::ConversionBoard;
pub use conversion::{Conversion, format_conversions, rebase_rates};
pub use currency::{
    CountryInfo, country_code_for, country_info, flag_image_for, format_currency, format_rate,
};
pub use history::{mock_base_rate, mock_history, mock_pair_history};
pub use input::{
    INVALID_AMOUNT_MESSAGE, InputValidation, NumberPad, limit_decimal_places, parse_amount,
    validate_amount_input,
};
#[cfg(feature = "rates-client")]
pub use rates::RatesClient;
pub use rates::{ExchangeRateErrorBody, ExchangeRateResponse};

pub const CURRENCIES: [&str; 6] = ["AUD", "USD", "EUR", "GBP", "CAD", "NZD"];
pub const DEFAULT_CURRENCY: &str = "AUD";
pub const DEFAULT_AMOUNT: u32 = 1000;
/// The only base the upstream rate provider serves.
pub const AVAILABLE_BASE: &str = "USD";
pub const DECIMAL_PLACES: usize = 4;
/// Placeholder for values that cannot be shown.
pub const EMPTY_VALUE: &str = "\u{2014}";
