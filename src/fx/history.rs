use chrono::{Days, NaiveDate};

use crate::core::HistoricalPoint;

/// AUD-quoted reference rates used to seed demo histories.
const AUD_BASE_RATES: &[(&str, f64)] = &[
    ("CAD", 0.8945),
    ("EUR", 0.6123),
    ("GBP", 0.5234),
    ("NZD", 1.0856),
    ("USD", 0.6512),
];

fn aud_rate(code: &str) -> Option<f64> {
    if code == "AUD" {
        return Some(1.0);
    }
    AUD_BASE_RATES
        .iter()
        .find(|(entry, _)| *entry == code)
        .map(|(_, rate)| *rate)
}

/// Reference rate for `from -> to`, derived through AUD for cross pairs.
/// `None` for identical or unknown currencies.
#[must_use]
pub fn mock_base_rate(from: &str, to: &str) -> Option<f64> {
    if from == to {
        return None;
    }
    let from_rate = aud_rate(from)?;
    let to_rate = aud_rate(to)?;
    Some(to_rate / from_rate)
}

/// Deterministic daily series around `base_rate`, wobbling within ±2%.
/// Rates are rounded to 4 decimals. Stops early if the calendar overflows.
#[must_use]
pub fn mock_history(base_rate: f64, start: NaiveDate, days: usize) -> Vec<HistoricalPoint> {
    let mut out = Vec::with_capacity(days);
    for idx in 0..days {
        let Some(date) = start.checked_add_days(Days::new(idx as u64)) else {
            break;
        };
        let phase = idx as f64;
        let wobble = 0.5 * (phase * 1.3).sin() + 0.5 * (phase * 0.37 + 1.0).cos();
        let rate = base_rate + wobble * 0.02 * base_rate;
        out.push(HistoricalPoint::new(date, (rate * 10_000.0).round() / 10_000.0));
    }
    out
}

/// Demo history for a currency pair, or empty when no reference rate exists.
#[must_use]
pub fn mock_pair_history(
    from: &str,
    to: &str,
    start: NaiveDate,
    days: usize,
) -> Vec<HistoricalPoint> {
    mock_base_rate(from, to).map_or_else(Vec::new, |rate| mock_history(rate, start, days))
}
