//! Scheduling service configuration.

use std::env;

use common::ServiceConfig;

/// Default appointment length when a booking does not specify one.
pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 30;

/// Scheduling service configuration.
#[derive(Debug, Clone)]
pub struct SchedulingServiceConfig {
    /// Name and log level
    pub service: ServiceConfig,
    /// Length of a booking made without an explicit duration
    pub default_appointment_minutes: i64,
}

impl SchedulingServiceConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: lookup("SCHEDULING_SERVICE_NAME")
                    .unwrap_or(defaults.service.service_name),
                log_level: lookup("SCHEDULING_LOG_LEVEL")
                    .or_else(|| lookup("LOG_LEVEL"))
                    .unwrap_or(defaults.service.log_level),
            },
            default_appointment_minutes: lookup("SCHEDULING_DEFAULT_APPOINTMENT_MINUTES")
                .and_then(|v| v.parse().ok())
                .filter(|minutes: &i64| *minutes > 0)
                .unwrap_or(defaults.default_appointment_minutes),
        }
    }
}

impl Default for SchedulingServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "scheduling-service".to_string(),
                log_level: "info".to_string(),
            },
            default_appointment_minutes: DEFAULT_APPOINTMENT_MINUTES,
        }
    }
}
