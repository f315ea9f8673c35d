//! Service container - Centralized access to the use cases and the stores
//! they share.

use std::sync::Arc;

use super::{Scheduler, SchedulingService, StaffDirectory, StaffService};
use crate::config::SchedulingServiceConfig;
use crate::repository::{
    AppointmentRepository, InMemoryAppointmentStore, InMemoryPatientStore, InMemoryServiceCatalog,
    InMemoryStaffStore, PatientRepository, ServiceCatalog, StaffRepository,
};

/// All application services wired to one set of repositories.
pub struct Services {
    scheduling: Arc<dyn SchedulingService>,
    staff: Arc<dyn StaffService>,
    patients: Arc<dyn PatientRepository>,
    catalog: Arc<dyn ServiceCatalog>,
}

impl Services {
    /// Wire services to the given repositories
    pub fn new(
        config: &SchedulingServiceConfig,
        appointments: Arc<dyn AppointmentRepository>,
        patients: Arc<dyn PatientRepository>,
        staff: Arc<dyn StaffRepository>,
        catalog: Arc<dyn ServiceCatalog>,
    ) -> Self {
        let scheduling = Arc::new(Scheduler::new(
            appointments,
            patients.clone(),
            staff.clone(),
            catalog.clone(),
            config.default_appointment_minutes,
        ));
        let staff_service = Arc::new(StaffDirectory::new(staff));

        Self {
            scheduling,
            staff: staff_service,
            patients,
            catalog,
        }
    }

    /// Wire services to fresh in-memory stores
    pub fn in_memory(config: &SchedulingServiceConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryAppointmentStore::new()),
            Arc::new(InMemoryPatientStore::new()),
            Arc::new(InMemoryStaffStore::new()),
            Arc::new(InMemoryServiceCatalog::new()),
        )
    }

    /// Get scheduling service
    pub fn scheduling(&self) -> Arc<dyn SchedulingService> {
        self.scheduling.clone()
    }

    /// Get staff service
    pub fn staff(&self) -> Arc<dyn StaffService> {
        self.staff.clone()
    }

    /// Get patient store
    pub fn patients(&self) -> Arc<dyn PatientRepository> {
        self.patients.clone()
    }

    /// Get service catalog
    pub fn catalog(&self) -> Arc<dyn ServiceCatalog> {
        self.catalog.clone()
    }
}
