//! Coffee intake — daily caffeine consumption in cups.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RestwellError, ValidationError};

/// Cups of coffee per day, always within `[1, 20]`.
///
/// The count is one-based at this boundary. The form's picker exposes a
/// zero-based row index; [`from_picker_index`](Self::from_picker_index)
/// performs that conversion so it never leaks into the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeIntake(u8);

impl CoffeeIntake {
    /// Lowest selectable count.
    pub const MIN_CUPS: u8 = 1;
    /// Highest selectable count.
    pub const MAX_CUPS: u8 = 20;

    /// Build an intake from a one-based cup count.
    ///
    /// # Errors
    ///
    /// Returns [`RestwellError::Validation`] when `cups` is outside
    /// `[1, 20]`.
    pub fn new(cups: u8) -> Result<Self, RestwellError> {
        if !(Self::MIN_CUPS..=Self::MAX_CUPS).contains(&cups) {
            return Err(ValidationError::CoffeeCupsOutOfRange { cups }.into());
        }
        Ok(Self(cups))
    }

    /// Build an intake from the picker's zero-based row index
    /// (row 0 is "1 cup").
    ///
    /// # Errors
    ///
    /// Returns [`RestwellError::Validation`] when the index maps outside
    /// `[1, 20]` cups.
    pub fn from_picker_index(index: u8) -> Result<Self, RestwellError> {
        Self::new(index.saturating_add(1))
    }

    /// The one-based cup count.
    #[must_use]
    pub fn cups(self) -> u8 {
        self.0
    }

    /// Pluralized label, e.g. `"1 cup"` or `"3 cups"`.
    #[must_use]
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }
}

impl Default for CoffeeIntake {
    /// The application default of a single cup.
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for CoffeeIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_one_cup() {
        assert_eq!(CoffeeIntake::default().cups(), 1);
    }

    #[test]
    fn should_accept_boundaries() {
        assert!(CoffeeIntake::new(1).is_ok());
        assert!(CoffeeIntake::new(20).is_ok());
    }

    #[test]
    fn should_reject_zero_cups() {
        let result = CoffeeIntake::new(0);
        assert!(matches!(
            result,
            Err(RestwellError::Validation(
                ValidationError::CoffeeCupsOutOfRange { cups: 0 }
            ))
        ));
    }

    #[test]
    fn should_reject_more_than_twenty_cups() {
        assert!(CoffeeIntake::new(21).is_err());
    }

    #[test]
    fn should_convert_picker_index_to_one_based_count() {
        assert_eq!(CoffeeIntake::from_picker_index(0).unwrap().cups(), 1);
        assert_eq!(CoffeeIntake::from_picker_index(19).unwrap().cups(), 20);
    }

    #[test]
    fn should_reject_picker_index_out_of_range() {
        assert!(CoffeeIntake::from_picker_index(20).is_err());
    }

    #[test]
    fn should_pluralize_label() {
        assert_eq!(CoffeeIntake::new(1).unwrap().label(), "1 cup");
        assert_eq!(CoffeeIntake::new(2).unwrap().label(), "2 cups");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let intake = CoffeeIntake::new(3).unwrap();
        let json = serde_json::to_string(&intake).unwrap();
        let parsed: CoffeeIntake = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, intake);
    }
}
