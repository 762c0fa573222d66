//! # restwell-domain
//!
//! Pure domain model for the restwell bedtime estimator.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, estimate identifiers
//! - Define the three **inputs** ([`WakeTime`](wake_time::WakeTime),
//!   [`SleepAmount`](sleep::SleepAmount), [`CoffeeIntake`](coffee::CoffeeIntake))
//!   with their range invariants
//! - Define the **feature vector** handed to the scoring model
//! - Define the **output** ([`Bedtime`](bedtime::Bedtime)) and its
//!   wrap-around time arithmetic
//! - Define **estimate events** (records of each estimation request)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod bedtime;
pub mod coffee;
pub mod event;
pub mod features;
pub mod sleep;
pub mod wake_time;
