//! Property-based tests for request validation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use super::currency::CurrencyPair;
use super::types::{DATE_FORMAT, RawReportRequest};
use super::validation::{ValidationError, validate_request};

/// Strategy for a date between 2000-01-01 and roughly 2054.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days)
    })
}

fn currency_strategy() -> impl Strategy<Value = CurrencyPair> {
    proptest::sample::select(CurrencyPair::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any six uppercase letters outside the allow-list are rejected.
    #[test]
    fn prop_unknown_currency_rejected(
        code in "[A-Z]{6}",
        start in date_strategy(),
    ) {
        prop_assume!(code.parse::<CurrencyPair>().is_err());
        let end = start + Duration::days(1);
        let raw = RawReportRequest::new(
            code.clone(),
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        );
        prop_assert_eq!(validate_request(&raw), Err(ValidationError::InvalidCurrency(code)));
    }

    /// Start on or after end is rejected for every valid currency.
    #[test]
    fn prop_non_increasing_range_rejected(
        pair in currency_strategy(),
        end in date_strategy(),
        back in 0i64..400,
    ) {
        let start = end + Duration::days(back);
        let raw = RawReportRequest::new(
            pair.code(),
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        );
        let is_order_error = matches!(
            validate_request(&raw),
            Err(ValidationError::InvalidDateOrder { .. })
        );
        prop_assert!(is_order_error);
    }

    /// Strictly increasing ranges with a known currency always validate.
    #[test]
    fn prop_increasing_range_accepted(
        pair in currency_strategy(),
        start in date_strategy(),
        span in 1i64..400,
    ) {
        let end = start + Duration::days(span);
        let raw = RawReportRequest::new(
            pair.code(),
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        );
        let request = validate_request(&raw).unwrap();
        prop_assert_eq!(request.currency_pair, pair);
        prop_assert!(request.start_date < request.end_date);
    }
}
