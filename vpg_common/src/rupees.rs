use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::Type;
use thiserror::Error;

use crate::op;

pub const INR_CURRENCY_CODE: &str = "INR";
pub const INR_CURRENCY_CODE_LOWER: &str = "inr";

//--------------------------------------       Rupees       ---------------------------------------------------------
/// An amount of Indian Rupees, stored as an integer number of paise (1 rupee = 100 paise).
///
/// All arithmetic and storage happens in paise so that money never touches floating point. The only decimal
/// conversions are at the JSON boundary ([`Rupees::from_decimal`] / [`Rupees::to_decimal`]), where amounts are
/// expressed in rupees with two decimal places.
#[derive(Debug, Clone, Copy, Default, Type, Ord, PartialOrd)]
#[sqlx(transparent)]
pub struct Rupees(i64);

op!(binary Rupees, Add, add);
op!(binary Rupees, Sub, sub);
op!(inplace Rupees, SubAssign, sub_assign);
op!(unary Rupees, Neg, neg);

impl Mul<i64> for Rupees {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in paise: {0}")]
pub struct MoneyConversionError(String);

impl From<i64> for Rupees {
    fn from(paise: i64) -> Self {
        Self(paise)
    }
}

impl PartialEq for Rupees {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Rupees {}

impl Display for Rupees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rupees = self.0 as f64 / 100.0;
        write!(f, "₹{rupees:0.2}")
    }
}

impl Serialize for Rupees {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Rupees {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let value = f64::deserialize(deserializer)?;
        Rupees::from_decimal(value).map_err(serde::de::Error::custom)
    }
}

impl Rupees {
    /// The amount in paise.
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Converts a decimal rupee amount (e.g. `1299.50`) into paise, rounding to the nearest paisa.
    pub fn from_decimal(rupees: f64) -> Result<Self, MoneyConversionError> {
        if !rupees.is_finite() {
            return Err(MoneyConversionError(format!("{rupees} is not a finite amount")));
        }
        let paise = (rupees * 100.0).round();
        if paise.abs() >= i64::MAX as f64 {
            return Err(MoneyConversionError(format!("{rupees} is too large to represent")));
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(paise as i64))
    }

    /// The amount as a decimal rupee value, for the JSON boundary only.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// The absolute difference between two amounts, in paise.
    pub fn difference(&self, other: Rupees) -> i64 {
        (self.0 - other.0).abs()
    }
}
