//! # restwell-adapter-http-axum
//!
//! HTTP adapter exposing the estimator to UI collaborators as a small
//! JSON API:
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `POST /api/estimate` | One estimation request |
//! | `GET /api/form` | Initial form state for the UI |
//! | `GET /api/estimates/stream` | SSE stream of estimate events |
//! | `GET /health` | Liveness probe |
//!
//! ## Dependency rule
//!
//! Depends on `restwell-app` (services, ports) and `restwell-domain`
//! only. The composition root wires the state and serves the router.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
