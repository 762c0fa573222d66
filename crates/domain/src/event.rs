//! Estimate event — an immutable record of one estimation request.
//!
//! Events are broadcast on the in-process event bus so observers (e.g.
//! the SSE stream) can follow estimation activity. They are transient:
//! nothing stores them.

use serde::{Deserialize, Serialize};

use crate::bedtime::Bedtime;
use crate::features::SleepFeatures;
use crate::id::EstimateId;
use crate::time::{Timestamp, now};

/// Outcome recorded by an [`EstimateEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateEventKind {
    /// The scorer produced a prediction and a bedtime was derived.
    Computed,
    /// The scorer failed; no bedtime was produced.
    Failed,
}

/// Record of one estimation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateEvent {
    pub id: EstimateId,
    pub kind: EstimateEventKind,
    /// The features that were scored.
    pub features: SleepFeatures,
    /// The derived bedtime; `None` when the request failed.
    pub bedtime: Option<Bedtime>,
    pub timestamp: Timestamp,
}

impl EstimateEvent {
    /// Record a successful estimation.
    #[must_use]
    pub fn computed(features: SleepFeatures, bedtime: Bedtime) -> Self {
        Self {
            id: EstimateId::new(),
            kind: EstimateEventKind::Computed,
            features,
            bedtime: Some(bedtime),
            timestamp: now(),
        }
    }

    /// Record a failed estimation.
    #[must_use]
    pub fn failed(features: SleepFeatures) -> Self {
        Self {
            id: EstimateId::new(),
            kind: EstimateEventKind::Failed,
            features,
            bedtime: None,
            timestamp: now(),
        }
    }
}
