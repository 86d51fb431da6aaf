use std::str::FromStr;

use chrono::NaiveDate;
use fx_chart::ChartError;
use fx_chart::fx::{
    AVAILABLE_BASE, CURRENCIES, ConversionBoard, ExchangeRateResponse, NumberPad,
    country_code_for, flag_image_for, format_conversions, format_currency, format_rate,
    limit_decimal_places, mock_base_rate, mock_history, parse_amount, rebase_rates,
    validate_amount_input,
};
use indexmap::IndexMap;
use rust_decimal::Decimal;

fn usd_rates() -> IndexMap<String, f64> {
    [
        ("USD", 1.0),
        ("AUD", 1.5),
        ("EUR", 0.9),
        ("GBP", 0.8),
        ("CAD", 1.35),
        ("NZD", 0.0),
    ]
    .into_iter()
    .map(|(code, rate)| (code.to_owned(), rate))
    .collect()
}

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("valid decimal")
}

#[test]
fn currency_formatting_matches_en_us_narrow_symbols() {
    assert_eq!(format_currency(dec("1234.5"), "USD"), "$1,234.50");
    assert_eq!(format_currency(dec("1000"), "AUD"), "$1,000.00");
    assert_eq!(format_currency(dec("0.005"), "EUR"), "€0.01");
    assert_eq!(format_currency(dec("-0.5"), "GBP"), "-£0.50");
    assert_eq!(format_currency(dec("1234567.891"), "XYZ"), "XYZ 1,234,567.89");
    assert_eq!(format_rate(0.65121, 4), "0.6512");
}

#[test]
fn country_lookups_fall_back_to_code() {
    assert_eq!(country_code_for("GBP"), "GB");
    assert_eq!(country_code_for("JPY"), "JPY");
    assert_eq!(flag_image_for("NZD"), "/images/nz.png");
    assert_eq!(flag_image_for("JPY"), "");
}

#[test]
fn rates_are_rebased_against_selected_currency() {
    let rebased = rebase_rates(&usd_rates(), "AUD");
    assert!((rebased["AUD"] - 1.0).abs() < 1e-12);
    assert!((rebased["USD"] - 1.0 / 1.5).abs() < 1e-12);

    let unchanged = rebase_rates(&usd_rates(), "JPY");
    assert_eq!(unchanged, usd_rates());
}

#[test]
fn conversions_skip_base_and_unusable_rates() {
    let conversions = format_conversions(&CURRENCIES, AVAILABLE_BASE, &usd_rates(), dec("1000"));
    let codes: Vec<&str> = conversions.keys().map(String::as_str).collect();
    assert_eq!(codes, ["AUD", "EUR", "GBP", "CAD"]);
    assert_eq!(conversions["AUD"].value, dec("1500"));
    assert_eq!(conversions["EUR"].rate, 0.9);
}

#[test]
fn board_rebases_provider_rates_before_converting() {
    let mut board = ConversionBoard::default();
    assert_eq!(board.base_currency(), "AUD");
    assert_eq!(board.amount(), dec("1000"));

    board.begin_loading();
    assert!(board.is_loading());
    board.apply_rates(&ExchangeRateResponse {
        base: AVAILABLE_BASE.to_owned(),
        rates: usd_rates(),
    });
    assert!(!board.is_loading());
    assert!(!board.conversions().contains_key("AUD"));
    let usd = board.conversions()["USD"];
    assert!((usd.rate - 1.0 / 1.5).abs() < 1e-12);

    assert!(board.set_amount(dec("10")));
    assert!(!board.set_amount(dec("10")));
    assert!(board.set_base_currency("USD"));

    board.apply_failure(&ChartError::RateSource("offline".to_owned()));
    assert!(board.conversions().is_empty());
}

#[test]
fn amount_validation_is_strict() {
    for ok in ["123", "123.45", ".5", "100."] {
        assert!(validate_amount_input(ok).is_valid, "{ok} should be valid");
    }
    for bad in ["abc", "1.2.3", "-5", "0", "1e3", " 12"] {
        let validation = validate_amount_input(bad);
        assert!(!validation.is_valid, "{bad} should be invalid");
        assert!(validation.show_error);
    }
    for quiet in ["", "."] {
        let validation = validate_amount_input(quiet);
        assert!(!validation.is_valid);
        assert!(!validation.show_error);
    }

    assert_eq!(parse_amount(".5").expect("parse"), dec("0.5"));
    assert_eq!(parse_amount("100.").expect("parse"), dec("100"));
    assert!(matches!(parse_amount("0.0"), Err(ChartError::InvalidAmount(_))));
    assert_eq!(limit_decimal_places("1.234567", 4), "1.2345");
    assert_eq!(limit_decimal_places("12", 4), "12");
}

#[test]
fn number_pad_builds_and_confirms_amounts() {
    let mut pad = NumberPad::default();
    pad.press_decimal();
    assert_eq!(pad.value(), "0.");
    pad.press_decimal();
    assert_eq!(pad.value(), "0.");
    for digit in [1, 2, 3, 4, 5] {
        pad.press_digit(digit);
    }
    assert_eq!(pad.value(), "0.1234");
    pad.press_digit(42);
    assert_eq!(pad.value(), "0.1234");

    pad.delete();
    assert_eq!(pad.value(), "0.123");
    assert_eq!(pad.confirm().expect("valid amount"), dec("0.123"));

    pad.clear();
    assert!(!pad.validation().is_valid);
    assert!(pad.confirm().is_err());

    pad.set_value("abc");
    assert!(pad.validation().show_error);
}

#[test]
fn exchange_rate_payload_parses_in_order() {
    let response = ExchangeRateResponse::from_json_str(
        r#"{"base":"USD","rates":{"EUR":0.9,"AUD":1.5,"GBP":0.8}}"#,
    )
    .expect("payload");
    assert_eq!(response.base, "USD");
    assert_eq!(response.rate("AUD"), Some(1.5));
    let codes: Vec<&str> = response.rates.keys().map(String::as_str).collect();
    assert_eq!(codes, ["EUR", "AUD", "GBP"]);

    let err = ExchangeRateResponse::from_json_str(r#"{"error":"Invalid base currency"}"#);
    assert!(
        matches!(err, Err(ChartError::RateSource(message)) if message == "Invalid base currency")
    );
    assert!(ExchangeRateResponse::from_json_str("not json").is_err());
}

#[test]
fn mock_history_is_deterministic_and_bounded() {
    let start = NaiveDate::from_ymd_opt(2025, 11, 5).expect("valid date");
    let base = mock_base_rate("AUD", "USD").expect("known pair");
    assert!((base - 0.6512).abs() < 1e-12);
    assert!(mock_base_rate("USD", "USD").is_none());
    let cross = mock_base_rate("USD", "EUR").expect("cross pair");
    assert!((cross - 0.6123 / 0.6512).abs() < 1e-12);

    let first = mock_history(base, start, 14);
    let second = mock_history(base, start, 14);
    assert_eq!(first, second);
    assert_eq!(first.len(), 14);
    assert_eq!(first[0].date, start);
    assert_eq!(first[13].date.to_string(), "2025-11-18");
    for point in &first {
        assert!((point.rate - base).abs() <= base * 0.02 + 1e-4);
    }
}
