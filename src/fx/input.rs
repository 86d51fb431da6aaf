use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ChartError, ChartResult};

use super::DECIMAL_PLACES;

pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid positive number";

/// Outcome of strict amount validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidation {
    pub is_valid: bool,
    /// Only raised for non-empty input other than a lone `"."`.
    pub show_error: bool,
}

/// Validates amount text: digits with at most one decimal point
/// (`"123"`, `"123.45"`, `".5"`, `"100."`), strictly positive.
#[must_use]
pub fn validate_amount_input(input: &str) -> InputValidation {
    let is_valid = parse_amount(input).is_ok();
    InputValidation {
        is_valid,
        show_error: !is_valid && !input.is_empty() && input != ".",
    }
}

/// Parses amount text under the same rules as `validate_amount_input`.
pub fn parse_amount(input: &str) -> ChartResult<Decimal> {
    if input.is_empty() || input == "." {
        return Err(ChartError::InvalidAmount("amount is empty".to_owned()));
    }
    if !input.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return Err(ChartError::InvalidAmount(format!(
            "`{input}` contains characters other than digits and `.`"
        )));
    }
    if input.matches('.').count() > 1 {
        return Err(ChartError::InvalidAmount(format!(
            "`{input}` has more than one decimal point"
        )));
    }

    let normalized = input.strip_suffix('.').unwrap_or(input);
    let normalized = if normalized.starts_with('.') {
        format!("0{normalized}")
    } else {
        normalized.to_owned()
    };
    let value = Decimal::from_str(&normalized)
        .map_err(|e| ChartError::InvalidAmount(format!("`{input}` is not a number: {e}")))?;

    if value <= Decimal::ZERO {
        return Err(ChartError::InvalidAmount(format!(
            "`{input}` must be greater than zero"
        )));
    }
    Ok(value)
}

/// Truncates the fractional part of `value` to `decimal_places` digits.
#[must_use]
pub fn limit_decimal_places(value: &str, decimal_places: usize) -> String {
    let Some((integer, fraction)) = value.split_once('.') else {
        return value.to_owned();
    };
    let fraction = match fraction.char_indices().nth(decimal_places) {
        Some((cut, _)) => &fraction[..cut],
        None => fraction,
    };
    format!("{integer}.{fraction}")
}

/// Text buffer behind the amount number pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPad {
    value: String,
    decimal_places: usize,
}

impl Default for NumberPad {
    fn default() -> Self {
        Self::new(DECIMAL_PLACES)
    }
}

impl NumberPad {
    #[must_use]
    pub fn new(decimal_places: usize) -> Self {
        Self {
            value: String::new(),
            decimal_places,
        }
    }

    /// Starts from existing text, e.g. the current amount.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Free-form edit from the text field; not truncated.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Appends a digit key (`0..=9`); other values are ignored.
    pub fn press_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        self.value.push(char::from(b'0' + digit));
        self.value = limit_decimal_places(&self.value, self.decimal_places);
    }

    /// Adds a decimal point unless one exists; an empty buffer becomes `"0."`.
    pub fn press_decimal(&mut self) {
        if self.value.contains('.') {
            return;
        }
        if self.value.is_empty() {
            self.value.push('0');
        }
        self.value.push('.');
    }

    pub fn delete(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    #[must_use]
    pub fn validation(&self) -> InputValidation {
        validate_amount_input(&self.value)
    }

    /// Confirm is only allowed for a valid amount.
    pub fn confirm(&self) -> ChartResult<Decimal> {
        parse_amount(&self.value)
    }
}
