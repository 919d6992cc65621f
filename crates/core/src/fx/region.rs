use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fx_errors::CurrencyError;

/// Geographic grouping of the location dimension.
///
/// The set is closed: every `region_name` in the warehouse must parse into one
/// of these, and both the rate and the currency tables are total over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Americas,
    Europe,
    Asia,
    Oceania,
    // Spelled as in the warehouse data.
    Afrika,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Americas,
        Region::Europe,
        Region::Asia,
        Region::Oceania,
        Region::Afrika,
    ];

    /// Label as stored in `location_dim.region_name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::Afrika => "Afrika",
        }
    }

    /// Native three-letter currency code of amounts recorded in this region.
    pub fn currency_code(&self) -> &'static str {
        match self {
            Region::Americas => "USD",
            Region::Europe => "EUR",
            Region::Asia => "CNY",
            Region::Oceania => "AUD",
            Region::Afrika => "ZAR",
        }
    }

    /// Multiplier taking a native amount to the reference currency.
    pub fn to_reference_rate(&self) -> Decimal {
        match self {
            Region::Americas => dec!(0.86),
            Region::Europe => Decimal::ONE,
            Region::Asia => dec!(0.12),
            Region::Oceania => dec!(0.56),
            Region::Afrika => dec!(0.048),
        }
    }
}

impl FromStr for Region {
    type Err = CurrencyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == label)
            .ok_or_else(|| CurrencyError::UnknownRegion(label.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
