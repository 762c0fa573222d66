//! Feature vector handed to the scoring model.

use serde::{Deserialize, Serialize};

use crate::coffee::CoffeeIntake;
use crate::sleep::SleepAmount;
use crate::wake_time::WakeTime;

/// The three numeric features the regression model scores.
///
/// Field names follow the trained model's feature names. All values are
/// `f64` because the model is a black-box scalar function of scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepFeatures {
    /// Wake time as seconds since local midnight.
    pub wake_seconds: f64,
    /// Desired sleep duration in hours.
    pub estimated_sleep_hours: f64,
    /// Daily coffee intake in cups (one-based).
    pub coffee_cups: f64,
}

impl SleepFeatures {
    /// Build the feature vector from validated domain inputs.
    #[must_use]
    pub fn new(wake: WakeTime, sleep: SleepAmount, coffee: CoffeeIntake) -> Self {
        Self {
            wake_seconds: f64::from(wake.seconds_since_midnight()),
            estimated_sleep_hours: sleep.hours(),
            coffee_cups: f64::from(coffee.cups()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_features_from_domain_inputs() {
        let features = SleepFeatures::new(
            WakeTime::new(7, 30).unwrap(),
            SleepAmount::new(8.25).unwrap(),
            CoffeeIntake::new(2).unwrap(),
        );

        assert!((features.wake_seconds - 27000.0).abs() < f64::EPSILON);
        assert!((features.estimated_sleep_hours - 8.25).abs() < f64::EPSILON);
        assert!((features.coffee_cups - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let features = SleepFeatures::new(
            WakeTime::default(),
            SleepAmount::default(),
            CoffeeIntake::default(),
        );
        let json = serde_json::to_string(&features).unwrap();
        let parsed: SleepFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, features);
    }
}
