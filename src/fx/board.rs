use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::ChartError;

use super::conversion::{Conversion, format_conversions, rebase_rates};
use super::rates::ExchangeRateResponse;
use super::{CURRENCIES, DEFAULT_AMOUNT, DEFAULT_CURRENCY};

/// State behind the conversion board: a base currency card plus one card per
/// target currency.
///
/// Rates are always fetched against the provider's base; `apply_rates`
/// re-expresses them against the selected base before converting.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionBoard {
    currencies: Vec<String>,
    base_currency: String,
    amount: Decimal,
    conversions: IndexMap<String, Conversion>,
    loading: bool,
}

impl Default for ConversionBoard {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY, Decimal::from(DEFAULT_AMOUNT))
    }
}

impl ConversionBoard {
    #[must_use]
    pub fn new(base_currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currencies: CURRENCIES.iter().map(|code| (*code).to_owned()).collect(),
            base_currency: base_currency.into(),
            amount,
            conversions: IndexMap::new(),
            loading: false,
        }
    }

    #[must_use]
    pub fn with_currencies<S: Into<String>>(
        mut self,
        currencies: impl IntoIterator<Item = S>,
    ) -> Self {
        self.currencies = currencies.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn conversions(&self) -> &IndexMap<String, Conversion> {
        &self.conversions
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` when the base changed and rates must be reloaded.
    pub fn set_base_currency(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if code == self.base_currency {
            return false;
        }
        self.base_currency = code;
        true
    }

    /// Returns `true` when the amount changed and rates must be reloaded.
    pub fn set_amount(&mut self, amount: Decimal) -> bool {
        if amount == self.amount {
            return false;
        }
        self.amount = amount;
        true
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn apply_rates(&mut self, response: &ExchangeRateResponse) {
        let rates = if response.base == self.base_currency {
            response.rates.clone()
        } else {
            rebase_rates(&response.rates, &self.base_currency)
        };
        self.conversions =
            format_conversions(&self.currencies, &self.base_currency, &rates, self.amount);
        self.loading = false;
        debug!(
            base = %self.base_currency,
            count = self.conversions.len(),
            "conversion board updated"
        );
    }

    /// A failed load leaves the board with no target cards.
    pub fn apply_failure(&mut self, error: &ChartError) {
        warn!(%error, "failed to load exchange rates");
        self.conversions.clear();
        self.loading = false;
    }
}
