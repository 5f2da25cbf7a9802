//! Percentage value object with one-decimal precision.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ValidationError;

/// A percentage between 0.0 and 100.0, kept in tenths of a percent.
///
/// Storing tenths makes the one-decimal rounding exact, so two percentages
/// that display the same compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percentage(u16);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(1000);

    /// Creates a percentage from tenths of a percent, clamping to 100.0.
    pub fn from_tenths(tenths: u16) -> Self {
        Self(tenths.min(1000))
    }

    /// Creates a percentage from tenths, rejecting values above 100.0.
    pub fn try_from_tenths(tenths: u16) -> Result<Self, ValidationError> {
        if tenths > 1000 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0.0,
                100.0,
                f64::from(tenths) / 10.0,
            ));
        }
        Ok(Self(tenths))
    }

    /// `part / whole * 100`, rounded half away from zero to one decimal.
    ///
    /// A zero `whole` yields 0% rather than NaN.
    pub fn of(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let tenths = (f64::from(part) * 1000.0 / f64::from(whole)).round();
        Self::from_tenths(tenths.clamp(0.0, 1000.0) as u16)
    }

    /// Rounds an arbitrary value to one decimal, rejecting NaN and values
    /// outside `[0, 100]`.
    pub fn try_from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0.0, 100.0, value));
        }
        Ok(Self((value * 10.0).round() as u16))
    }

    pub fn tenths(&self) -> u16 {
        self.0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value())
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Percentage::try_from_f64(value).map_err(serde::de::Error::custom)
    }
}
