//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Builds a percentage from a `part / whole` ratio, rounded down.
    ///
    /// A zero `whole` yields zero.
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self(0);
        }
        let pct = (u64::from(part) * 100 / u64::from(whole)).min(100);
        Self(pct as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ratio_rounds_down() {
        assert_eq!(Percentage::from_ratio(1, 4).value(), 25);
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(4, 4), Percentage::HUNDRED);
    }

    #[test]
    fn from_ratio_clamps_to_100() {
        assert_eq!(Percentage::from_ratio(9, 4), Percentage::HUNDRED);
    }

    #[test]
    fn from_ratio_with_zero_whole_is_zero() {
        assert_eq!(Percentage::from_ratio(3, 0).value(), 0);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::from_ratio(3, 4)), "75%");
        assert_eq!(format!("{}", Percentage::from_ratio(0, 4)), "0%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::from_ratio(1, 2)).unwrap();
        assert_eq!(json, "50");
    }
}
