//! Prompt construction for report generation.

use super::types::ReportRequest;

/// Bumped whenever [`PROMPT_TEMPLATE`] changes wording.
pub const PROMPT_TEMPLATE_VERSION: u32 = 1;

const CURRENCY_SLOT: &str = "{currency}";
const START_SLOT: &str = "{start_date}";
const END_SLOT: &str = "{end_date}";

/// Report instructions. Slots are replaced verbatim.
pub const PROMPT_TEMPLATE: &str = "\
You are a professional financial analyst. Generate a comprehensive currency analysis report for {currency} covering the period from {start_date} to {end_date}.

Please include the following sections in your report:

1. EXECUTIVE SUMMARY
- Brief overview of the currency pair's performance during this period
- Key highlights and major trends

2. MARKET ANALYSIS
- Price movements and volatility analysis
- Major support and resistance levels
- Trading volume patterns (if applicable)

3. FUNDAMENTAL FACTORS
- Economic indicators that influenced the currency pair
- Central bank policies and interest rate changes
- Political and economic events that impacted the currencies

4. TECHNICAL ANALYSIS
- Trend analysis (bullish, bearish, or sideways)
- Key technical indicators and patterns
- Chart patterns observed during the period

5. MARKET SENTIMENT
- Overall market sentiment towards both currencies
- Risk appetite and safe-haven flows
- Institutional vs retail positioning

6. FUTURE OUTLOOK
- Short-term price projections
- Key levels to watch
- Potential catalysts for future movements

7. RISK FACTORS
- Potential risks and challenges
- Scenarios that could impact the currency pair

Please provide specific data points, percentages, and actionable insights where possible.
Make the report professional, informative, and suitable for both beginner and advanced traders.

Currency Pair: {currency}
Analysis Period: {start_date} to {end_date}
";

/// Renders the report prompt for a validated request.
#[must_use]
pub fn build_prompt(request: &ReportRequest) -> String {
    render(
        request.currency_pair.code(),
        &request.start_label(),
        &request.end_label(),
    )
}

fn render(currency: &str, start: &str, end: &str) -> String {
    PROMPT_TEMPLATE
        .replace(CURRENCY_SLOT, currency)
        .replace(START_SLOT, start)
        .replace(END_SLOT, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{CurrencyPair, RawReportRequest, validate_request};

    fn request(currency: &str, start: &str, end: &str) -> ReportRequest {
        validate_request(&RawReportRequest::new(currency, start, end)).unwrap()
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request("USDINR", "2025-05-01", "2025-05-31");
        assert_eq!(build_prompt(&req), build_prompt(&req));
    }

    #[test]
    fn test_all_slots_filled() {
        let prompt = build_prompt(&request("EURUSD", "2024-01-01", "2024-03-31"));
        assert!(!prompt.contains(CURRENCY_SLOT));
        assert!(!prompt.contains(START_SLOT));
        assert!(!prompt.contains(END_SLOT));
        assert!(prompt.contains("analysis report for EURUSD covering the period from 2024-01-01 to 2024-03-31"));
        assert!(prompt.ends_with("Currency Pair: EURUSD\nAnalysis Period: 2024-01-01 to 2024-03-31\n"));
    }

    #[test]
    fn test_sections_in_order() {
        let prompt = build_prompt(&request("USDBRL", "2024-01-01", "2024-02-01"));
        let headings = [
            "1. EXECUTIVE SUMMARY",
            "2. MARKET ANALYSIS",
            "3. FUNDAMENTAL FACTORS",
            "4. TECHNICAL ANALYSIS",
            "5. MARKET SENTIMENT",
            "6. FUTURE OUTLOOK",
            "7. RISK FACTORS",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| prompt.find(h).expect("heading present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_different_inputs_differ() {
        let a = build_prompt(&request("USDJPY", "2024-01-01", "2024-02-01"));
        let b = build_prompt(&request("USDZAR", "2024-01-01", "2024-02-01"));
        assert_ne!(a, b);
        for pair in CurrencyPair::ALL {
            let prompt = build_prompt(&request(pair.code(), "2024-01-01", "2024-02-01"));
            assert_eq!(prompt.matches(pair.code()).count(), 2);
        }
    }
}
