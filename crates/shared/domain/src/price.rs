//! Monetary price value object.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A strictly positive amount charged for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Construct a price.
    ///
    /// # Errors
    /// Returns an out-of-range error for zero or negative amounts.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::out_of_range(format!(
                "price must be greater than zero, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    /// The amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_price() {
        let price = Price::new(Decimal::new(4550, 2)).unwrap();
        assert_eq!(price.to_string(), "45.50");
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(matches!(
            Price::new(Decimal::ZERO),
            Err(DomainError::OutOfRange(_))
        ));
        assert!(matches!(
            Price::new(Decimal::new(-1, 2)),
            Err(DomainError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_smallest_fraction_accepted() {
        assert!(Price::new(Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn test_serde_rejects_non_positive() {
        let price: Price = serde_json::from_str("\"120.00\"").unwrap();
        assert_eq!(price.amount(), Decimal::new(12000, 2));
        assert!(serde_json::from_str::<Price>("\"0\"").is_err());
    }
}
