//! Bedtime form — serializable view state updated via discrete events.
//!
//! The form owns the three mutable inputs and the alert surface. State
//! changes only through [`BedtimeForm::apply`], which keeps the
//! estimator pure and lets the reducer be tested without any UI.

use serde::{Deserialize, Serialize};

use restwell_domain::bedtime::Bedtime;
use restwell_domain::coffee::CoffeeIntake;
use restwell_domain::error::{SCORING_FAILURE_MESSAGE, SCORING_FAILURE_TITLE};
use restwell_domain::sleep::SleepAmount;
use restwell_domain::wake_time::WakeTime;

/// Title shown above a successful estimation result.
pub const RESULT_ALERT_TITLE: &str = "Your ideal bedtime is…";

/// Placeholder message shown before the first estimation.
const PLACEHOLDER_MESSAGE: &str = "???";

/// Alert surface: a title/message pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// The complete per-session UI state. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedtimeForm {
    pub wake_time: WakeTime,
    pub sleep_amount: SleepAmount,
    pub coffee: CoffeeIntake,
    pub alert: Alert,
    pub showing_alert: bool,
}

impl Default for BedtimeForm {
    /// Initial state at application start: 07:00 wake, 8 hours of
    /// sleep, one cup of coffee, no alert shown yet.
    fn default() -> Self {
        Self {
            wake_time: WakeTime::default(),
            sleep_amount: SleepAmount::default(),
            coffee: CoffeeIntake::default(),
            alert: Alert {
                title: RESULT_ALERT_TITLE.to_string(),
                message: PLACEHOLDER_MESSAGE.to_string(),
            },
            showing_alert: false,
        }
    }
}

/// Discrete state transitions of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum FormEvent {
    /// The wake-time picker changed.
    WakeTimeSet(WakeTime),
    /// The sleep stepper ticked up.
    SleepIncremented,
    /// The sleep stepper ticked down.
    SleepDecremented,
    /// The coffee picker selected a row (zero-based index, row 0 = 1 cup).
    CoffeeSelected { index: u8 },
    /// An estimation request succeeded.
    EstimateSucceeded(Bedtime),
    /// An estimation request failed.
    EstimateFailed,
    /// The alert was dismissed.
    AlertDismissed,
}

impl BedtimeForm {
    /// Apply one event to the form state.
    ///
    /// An out-of-range picker index leaves the coffee selection
    /// unchanged; the widget enforces the range before emitting the
    /// event, so there is nothing sensible to show for a bad one.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::WakeTimeSet(wake) => self.wake_time = wake,
            FormEvent::SleepIncremented => self.sleep_amount = self.sleep_amount.increment(),
            FormEvent::SleepDecremented => self.sleep_amount = self.sleep_amount.decrement(),
            FormEvent::CoffeeSelected { index } => {
                if let Ok(coffee) = CoffeeIntake::from_picker_index(index) {
                    self.coffee = coffee;
                }
            }
            FormEvent::EstimateSucceeded(bedtime) => {
                self.alert = Alert {
                    title: RESULT_ALERT_TITLE.to_string(),
                    message: bedtime.format_short(),
                };
                self.showing_alert = true;
            }
            FormEvent::EstimateFailed => {
                self.alert = Alert {
                    title: SCORING_FAILURE_TITLE.to_string(),
                    message: SCORING_FAILURE_MESSAGE.to_string(),
                };
                self.showing_alert = true;
            }
            FormEvent::AlertDismissed => self.showing_alert = false,
        }
    }

    /// The three validated inputs for an estimation request.
    #[must_use]
    pub fn inputs(&self) -> (WakeTime, SleepAmount, CoffeeIntake) {
        (self.wake_time, self.sleep_amount, self.coffee)
    }
}
