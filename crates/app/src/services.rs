//! Application services (driving ports / use-cases).

pub mod estimator_service;
