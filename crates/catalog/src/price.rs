//! Per-seedling price (decimal amount, currency-agnostic).

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use nursery_core::{DomainError, DomainResult, ValueObject};

/// Decimal places shown in money labels.
pub const DISPLAY_DECIMALS: u32 = 2;

/// A non-negative decimal amount.
///
/// The hosted table stores prices as `numeric`, which arrives either as a JSON
/// number or as a decimal string; both decode exactly. Only negative amounts
/// are rejected. Serialization keeps the exact amount; `Display` rounds to
/// cents for labels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(format!("price cannot be negative: {amount}")));
        }
        Ok(Self(amount))
    }

    /// Amount given in hundredths (e.g. `Price::from_minor_units(1250)` is 12.50).
    pub fn from_minor_units(minor_units: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(minor_units), DISPLAY_DECIMALS))
    }

    /// Whole units (e.g. `Price::from_major(50)` is 50).
    pub fn from_major(major: u64) -> Self {
        Self(Decimal::from(major))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Value of `quantity` units at this price; saturates at `Decimal::MAX`.
    pub fn times(&self, quantity: u64) -> Price {
        Price(self.0.checked_mul(Decimal::from(quantity)).unwrap_or(Decimal::MAX))
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.checked_add(other.0).unwrap_or(Decimal::MAX))
    }

    /// Amount rounded half away from zero and padded to two decimals.
    pub fn to_cents(&self) -> Decimal {
        let mut cents = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(DISPLAY_DECIMALS);
        cents
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_cents())
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|err| DomainError::validation(format!("malformed price {s:?}: {err}")))?;
        Price::new(amount)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn parses_decimal_strings() {
        assert_eq!("12.50".parse::<Price>().unwrap(), Price::from_minor_units(1250));
        assert_eq!("12.5".parse::<Price>().unwrap(), Price::from_minor_units(1250));
        assert_eq!("7".parse::<Price>().unwrap(), Price::from_major(7));
        assert_eq!("12.345".parse::<Price>().unwrap().amount(), dec("12.345"));
        assert_eq!("0".parse::<Price>().unwrap(), Price::ZERO);
    }

    #[test]
    fn rejects_negative_and_malformed_prices() {
        for bad in ["-1", "-0.01", "abc", "", "1.2.3"] {
            let err = bad.parse::<Price>().unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for {bad:?}"),
            }
        }
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let p: Price = serde_json::from_str("100").unwrap();
        assert_eq!(p, Price::from_major(100));

        let p: Price = serde_json::from_str("12.34").unwrap();
        assert_eq!(p, Price::from_minor_units(1234));

        let p: Price = serde_json::from_str("\"45.00\"").unwrap();
        assert_eq!(p, Price::from_major(45));

        assert!(serde_json::from_str::<Price>("-3.5").is_err());
    }

    #[test]
    fn sub_cent_prices_decode_exactly() {
        let p: Price = serde_json::from_str("12.345").unwrap();
        assert_eq!(p.amount(), dec("12.345"));

        let p: Price = serde_json::from_str("\"0.125\"").unwrap();
        assert_eq!(p.amount(), dec("0.125"));
        assert_eq!(p.to_string(), "0.13");
    }

    #[test]
    fn display_pads_to_cents() {
        assert_eq!(Price::from_major(50).to_string(), "50.00");
        assert_eq!(Price::from_minor_units(1205).to_string(), "12.05");
        assert_eq!("12.345".parse::<Price>().unwrap().to_string(), "12.35");
    }

    #[test]
    fn serializes_exact_amount() {
        let json = serde_json::to_string(&Price::from_minor_units(1205)).unwrap();
        assert_eq!(json, "\"12.05\"");

        let json = serde_json::to_string(&"12.345".parse::<Price>().unwrap()).unwrap();
        assert_eq!(json, "\"12.345\"");
    }

    #[test]
    fn times_saturates_instead_of_overflowing() {
        let p = Price::new(Decimal::MAX).unwrap();
        assert_eq!(p.times(2).amount(), Decimal::MAX);
        assert_eq!(Price::from_major(50).times(30), Price::from_major(1500));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: Display output of a whole-cent price parses back to the same price.
        #[test]
        fn display_parses_back(minor in 0u64..10_000_000_000u64) {
            let price = Price::from_minor_units(minor);
            let parsed: Price = price.to_string().parse().unwrap();
            prop_assert_eq!(parsed, price);
        }
    }
}
