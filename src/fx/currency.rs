use rust_decimal::{Decimal, RoundingStrategy};

/// Region code and flag asset for a supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryInfo {
    pub region: &'static str,
    pub flag_image: &'static str,
}

const COUNTRY_MAP: &[(&str, CountryInfo)] = &[
    (
        "AUD",
        CountryInfo {
            region: "AU",
            flag_image: "/images/au.png",
        },
    ),
    (
        "USD",
        CountryInfo {
            region: "US",
            flag_image: "/images/US.png",
        },
    ),
    (
        "CAD",
        CountryInfo {
            region: "CA",
            flag_image: "/images/ca.png",
        },
    ),
    (
        "EUR",
        CountryInfo {
            region: "EU",
            flag_image: "/images/eu.png",
        },
    ),
    (
        "GBP",
        CountryInfo {
            region: "GB",
            flag_image: "/images/uk.png",
        },
    ),
    (
        "NZD",
        CountryInfo {
            region: "NZ",
            flag_image: "/images/nz.png",
        },
    ),
];

#[must_use]
pub fn country_info(code: &str) -> Option<CountryInfo> {
    COUNTRY_MAP
        .iter()
        .find(|(entry, _)| *entry == code)
        .map(|(_, info)| *info)
}

/// Region code for a currency, falling back to the currency code itself.
#[must_use]
pub fn country_code_for(code: &str) -> &str {
    country_info(code).map_or(code, |info| info.region)
}

/// Flag image path, or `""` when no flag is known.
#[must_use]
pub fn flag_image_for(code: &str) -> &'static str {
    country_info(code).map_or("", |info| info.flag_image)
}

fn narrow_symbol(code: &str) -> Option<&'static str> {
    match code {
        "AUD" | "CAD" | "NZD" | "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" | "CNY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn minor_units(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

/// Formats a money amount the way an en-US locale with narrow symbols does:
/// `"$1,234.56"`, `"€1,234.56"`, `"-£0.50"`. Unknown codes are prefixed,
/// e.g. `"XYZ 1,234.56"`.
#[must_use]
pub fn format_currency(value: Decimal, code: &str) -> String {
    let scale = minor_units(code);
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut body = group_thousands(integer);
    if let Some(fraction) = fraction {
        body.push('.');
        body.push_str(fraction);
    }

    let sign = if negative { "-" } else { "" };
    match narrow_symbol(code) {
        Some(symbol) => format!("{sign}{symbol}{body}"),
        None => format!("{sign}{code} {body}"),
    }
}

/// Fixed-decimal rate text, e.g. `format_rate(0.65121, 4) == "0.6512"`.
#[must_use]
pub fn format_rate(rate: f64, decimals: usize) -> String {
    format!("{rate:.decimals$}")
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
