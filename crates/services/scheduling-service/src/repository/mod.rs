//! Repository layer for data access.
//!
//! Ports are traits so the use cases can run against any store; the
//! in-memory stores back the service container and the integration tests.

mod appointment_repository;
mod directory_repository;
mod memory;

pub use appointment_repository::AppointmentRepository;
pub use directory_repository::{PatientRepository, ServiceCatalog, StaffRepository};
pub use memory::{
    InMemoryAppointmentStore, InMemoryPatientStore, InMemoryServiceCatalog, InMemoryStaffStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use directory_repository::{MockPatientRepository, MockServiceCatalog, MockStaffRepository};
