//! In-memory repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{
    Appointment, AppointmentId, Email, Patient, PatientId, Service, ServiceId, User, UserId,
};

use super::{AppointmentRepository, PatientRepository, ServiceCatalog, StaffRepository};

/// Appointments held in process memory.
#[derive(Default)]
pub struct InMemoryAppointmentStore {
    appointments: RwLock<HashMap<AppointmentId, Appointment>>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentStore {
    async fn find_by_id(&self, id: AppointmentId) -> AppResult<Option<Appointment>> {
        Ok(self.appointments.read().await.get(&id).cloned())
    }

    async fn save(&self, appointment: Appointment) -> AppResult<()> {
        self.appointments
            .write()
            .await
            .insert(appointment.id(), appointment);
        Ok(())
    }

    async fn list_for_dentist(&self, dentist_id: UserId) -> AppResult<Vec<Appointment>> {
        let mut found: Vec<Appointment> = self
            .appointments
            .read()
            .await
            .values()
            .filter(|a| a.dentist().id() == dentist_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| (a.start_time(), a.id()));
        Ok(found)
    }
}

/// Patients held in process memory.
#[derive(Default)]
pub struct InMemoryPatientStore {
    patients: RwLock<HashMap<PatientId, Patient>>,
}

impl InMemoryPatientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientStore {
    async fn find_by_id(&self, id: PatientId) -> AppResult<Option<Patient>> {
        Ok(self.patients.read().await.get(&id).cloned())
    }

    async fn save(&self, patient: Patient) -> AppResult<()> {
        self.patients.write().await.insert(patient.id(), patient);
        Ok(())
    }
}

/// Staff members held in process memory, unique by email.
#[derive(Default)]
pub struct InMemoryStaffStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryStaffStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StaffRepository for InMemoryStaffStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        // Check and insert under one write lock so two registrations can't race
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(AppError::conflict("Email"));
        }
        users.insert(user.id(), user.clone());
        Ok(user)
    }
}

/// Services held in process memory.
#[derive(Default)]
pub struct InMemoryServiceCatalog {
    services: RwLock<HashMap<ServiceId, Service>>,
}

impl InMemoryServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceCatalog for InMemoryServiceCatalog {
    async fn find_by_id(&self, id: ServiceId) -> AppResult<Option<Service>> {
        Ok(self.services.read().await.get(&id).cloned())
    }

    async fn save(&self, service: Service) -> AppResult<()> {
        self.services.write().await.insert(service.id(), service);
        Ok(())
    }
}
