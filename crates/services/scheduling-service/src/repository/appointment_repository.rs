//! Appointment persistence port.

use async_trait::async_trait;

use common::AppResult;
use domain::{Appointment, AppointmentId, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Appointment repository trait for dependency injection.
///
/// `save` stores the whole aggregate (status, references, timing and
/// provided services) in one step, replacing any previous version.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find appointment by ID
    async fn find_by_id(&self, id: AppointmentId) -> AppResult<Option<Appointment>>;

    /// Insert or replace an appointment
    async fn save(&self, appointment: Appointment) -> AppResult<()>;

    /// All appointments booked with a dentist, earliest first
    async fn list_for_dentist(&self, dentist_id: UserId) -> AppResult<Vec<Appointment>>;
}
