//! # restwell-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SleepScorer` — the opaque pre-trained regression model
//!   - `EventPublisher` — broadcast estimate events to observers
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EstimatorService` — one-shot bedtime estimation
//!   - `BedtimeForm` — serializable view state updated via discrete events
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate domain values without knowing *how* scoring works
//!
//! ## Dependency rule
//! Depends on `restwell-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod form;
pub mod ports;
pub mod services;
