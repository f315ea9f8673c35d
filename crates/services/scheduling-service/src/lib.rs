//! Scheduling Service Library
//!
//! Appointment booking and staff use cases on top of the domain crate:
//! repository ports with in-memory stores, per-appointment write
//! serialisation and configuration.

pub mod config;
pub mod repository;
pub mod service;

pub use config::SchedulingServiceConfig;
pub use service::Services;
