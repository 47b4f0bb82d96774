//! Supported currency pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currency pairs a report can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyPair {
    /// US dollar / Indian rupee.
    #[serde(rename = "USDINR")]
    UsdInr,
    /// Euro / US dollar.
    #[serde(rename = "EURUSD")]
    EurUsd,
    /// US dollar / Japanese yen.
    #[serde(rename = "USDJPY")]
    UsdJpy,
    /// US dollar / Australian dollar.
    #[serde(rename = "USDAUD")]
    UsdAud,
    /// US dollar / Philippine peso.
    #[serde(rename = "USDPHP")]
    UsdPhp,
    /// US dollar / South African rand.
    #[serde(rename = "USDZAR")]
    UsdZar,
    /// US dollar / Mexican peso.
    #[serde(rename = "USDMXN")]
    UsdMxn,
    /// US dollar / Brazilian real.
    #[serde(rename = "USDBRL")]
    UsdBrl,
}

impl CurrencyPair {
    /// Every supported pair, in display order.
    pub const ALL: [Self; 8] = [
        Self::UsdInr,
        Self::EurUsd,
        Self::UsdJpy,
        Self::UsdAud,
        Self::UsdPhp,
        Self::UsdZar,
        Self::UsdMxn,
        Self::UsdBrl,
    ];

    /// The six-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UsdInr => "USDINR",
            Self::EurUsd => "EURUSD",
            Self::UsdJpy => "USDJPY",
            Self::UsdAud => "USDAUD",
            Self::UsdPhp => "USDPHP",
            Self::UsdZar => "USDZAR",
            Self::UsdMxn => "USDMXN",
            Self::UsdBrl => "USDBRL",
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a code is not on the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrencyPair(pub String);

impl FromStr for CurrencyPair {
    type Err = UnknownCurrencyPair;

    /// Matching is exact: `usdinr` is not `USDINR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pair| pair.code() == s)
            .ok_or_else(|| UnknownCurrencyPair(s.to_string()))
    }
}
