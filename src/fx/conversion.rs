use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::warn;

/// Converted amount for one target currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub value: Decimal,
    pub rate: f64,
}

/// Re-expresses `rates` (quoted against some upstream base) against
/// `new_base` by dividing every rate by the new base's rate.
///
/// Returns the rates unchanged when `new_base` has no usable rate.
#[must_use]
pub fn rebase_rates(rates: &IndexMap<String, f64>, new_base: &str) -> IndexMap<String, f64> {
    let Some(&base_rate) = rates.get(new_base) else {
        warn!(base = new_base, "no rate for requested base; keeping upstream base");
        return rates.clone();
    };
    if !base_rate.is_finite() || base_rate == 0.0 {
        warn!(base = new_base, base_rate, "unusable base rate; keeping upstream base");
        return rates.clone();
    }

    rates
        .iter()
        .map(|(code, rate)| (code.clone(), rate / base_rate))
        .collect()
}

/// Builds the target-currency conversions shown on the board, in the order
/// of `currencies`. The base currency and currencies without a positive
/// finite rate are skipped.
#[must_use]
pub fn format_conversions<S: AsRef<str>>(
    currencies: &[S],
    base_currency: &str,
    rates: &IndexMap<String, f64>,
    amount: Decimal,
) -> IndexMap<String, Conversion> {
    let mut conversions = IndexMap::with_capacity(currencies.len());
    for code in currencies.iter().map(AsRef::as_ref) {
        if code == base_currency {
            continue;
        }
        let Some(&rate) = rates.get(code) else {
            continue;
        };
        if !rate.is_finite() || rate <= 0.0 {
            continue;
        }
        let Some(rate_decimal) = Decimal::from_f64(rate) else {
            warn!(currency = code, rate, "rate not representable as decimal");
            continue;
        };
        let Some(value) = amount.checked_mul(rate_decimal) else {
            warn!(currency = code, %amount, rate, "converted amount overflowed");
            continue;
        };
        conversions.insert(code.to_owned(), Conversion { value, rate });
    }
    conversions
}
