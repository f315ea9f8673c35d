//! Lookup ports for the entities an appointment refers to.

use async_trait::async_trait;

use common::AppResult;
use domain::{Email, Patient, PatientId, Service, ServiceId, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Patient repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find patient by ID
    async fn find_by_id(&self, id: PatientId) -> AppResult<Option<Patient>>;

    /// Insert or replace a patient
    async fn save(&self, patient: Patient) -> AppResult<()>;
}

/// Staff repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Find staff member by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find staff member by exact email address
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// Create a staff member; fails with a conflict if the email is taken
    async fn create(&self, user: User) -> AppResult<User>;
}

/// Catalog of billable services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Find service by ID
    async fn find_by_id(&self, id: ServiceId) -> AppResult<Option<Service>>;

    /// Insert or replace a service
    async fn save(&self, service: Service) -> AppResult<()>;
}
