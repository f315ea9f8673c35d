//! Scheduling service - Appointment booking use cases.
//!
//! Every mutating use case is one unit: lock the appointment, load it,
//! apply a single aggregate operation, save it. Lookups of the patient,
//! dentist and services it refers to happen here; the aggregate itself
//! never loads anything.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset};
use serde::Deserialize;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{
    require_present, Appointment, AppointmentId, DomainResult, Patient, PatientId, ServiceId,
    User, UserId,
};

use super::locks::AppointmentLocks;
use super::view::AppointmentView;
use crate::repository::{
    AppointmentRepository, PatientRepository, ServiceCatalog, StaffRepository,
};

/// Booking request
#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointment {
    pub patient_id: PatientId,
    pub dentist_id: UserId,
    /// Must carry a zero UTC offset
    pub start_time: DateTime<FixedOffset>,
    /// Falls back to the configured default when absent
    pub duration_minutes: Option<i64>,
}

/// Scheduling service trait for dependency injection.
#[async_trait]
pub trait SchedulingService: Send + Sync {
    /// Book a new appointment in scheduled status
    async fn book(&self, request: BookAppointment) -> AppResult<AppointmentView>;

    /// Get appointment by ID
    async fn get(&self, id: AppointmentId) -> AppResult<AppointmentView>;

    /// List a dentist's appointments, earliest first
    async fn list_for_dentist(&self, dentist_id: UserId) -> AppResult<Vec<AppointmentView>>;

    /// Assign a different dentist
    async fn change_dentist(&self, id: AppointmentId, dentist_id: UserId)
        -> AppResult<AppointmentView>;

    /// Assign a different patient
    async fn change_patient(&self, id: AppointmentId, patient_id: PatientId)
        -> AppResult<AppointmentView>;

    /// Move the appointment to a new UTC start time
    async fn reschedule(
        &self,
        id: AppointmentId,
        start_time: DateTime<FixedOffset>,
    ) -> AppResult<AppointmentView>;

    /// Change the appointment length
    async fn change_duration(&self, id: AppointmentId, minutes: i64) -> AppResult<AppointmentView>;

    /// Cancel a scheduled appointment
    async fn cancel(&self, id: AppointmentId) -> AppResult<AppointmentView>;

    /// Record provided services and complete the appointment
    async fn complete(
        &self,
        id: AppointmentId,
        service_ids: Vec<ServiceId>,
    ) -> AppResult<AppointmentView>;

    /// Mark a completed appointment as paid
    async fn pay(&self, id: AppointmentId) -> AppResult<AppointmentView>;
}

/// Concrete implementation of SchedulingService using repositories.
pub struct Scheduler {
    appointments: Arc<dyn AppointmentRepository>,
    patients: Arc<dyn PatientRepository>,
    staff: Arc<dyn StaffRepository>,
    catalog: Arc<dyn ServiceCatalog>,
    locks: AppointmentLocks,
    default_duration_minutes: i64,
}

impl Scheduler {
    /// Create new scheduling service instance with repositories
    pub fn new(
        appointments: Arc<dyn AppointmentRepository>,
        patients: Arc<dyn PatientRepository>,
        staff: Arc<dyn StaffRepository>,
        catalog: Arc<dyn ServiceCatalog>,
        default_duration_minutes: i64,
    ) -> Self {
        Self {
            appointments,
            patients,
            staff,
            catalog,
            locks: AppointmentLocks::new(),
            default_duration_minutes,
        }
    }

    async fn load_patient(&self, id: PatientId) -> AppResult<Patient> {
        debug!(patient_id = %id, "Loading patient");
        self.patients.find_by_id(id).await?.ok_or_not_found("Patient")
    }

    async fn load_dentist(&self, id: UserId) -> AppResult<User> {
        debug!(dentist_id = %id, "Loading dentist");
        self.staff.find_by_id(id).await?.ok_or_not_found("Dentist")
    }

    /// Lock, load, apply one operation, save.
    async fn mutate<F>(
        &self,
        id: AppointmentId,
        operation: &'static str,
        apply: F,
    ) -> AppResult<AppointmentView>
    where
        F: FnOnce(&mut Appointment) -> DomainResult<()> + Send,
    {
        let _guard = self.locks.acquire(id).await;

        let mut appointment = self
            .appointments
            .find_by_id(id)
            .await?
            .ok_or_not_found("Appointment")?;

        if let Err(e) = apply(&mut appointment) {
            warn!(
                appointment_id = %id,
                operation,
                status = %appointment.status(),
                error = %e,
                "Appointment operation rejected"
            );
            return Err(e.into());
        }

        self.appointments.save(appointment.clone()).await?;
        info!(
            appointment_id = %id,
            operation,
            status = %appointment.status(),
            "Appointment updated"
        );

        Ok(AppointmentView::from(&appointment))
    }
}

fn duration_from_minutes(value: i64) -> AppResult<Duration> {
    Duration::try_minutes(value).ok_or_else(|| {
        AppError::validation(format!("duration of {} minutes is out of range", value))
    })
}

#[async_trait]
impl SchedulingService for Scheduler {
    async fn book(&self, request: BookAppointment) -> AppResult<AppointmentView> {
        let patient = self.load_patient(request.patient_id).await?;
        let dentist = self.load_dentist(request.dentist_id).await?;
        let duration = duration_from_minutes(
            request
                .duration_minutes
                .unwrap_or(self.default_duration_minutes),
        )?;

        let appointment = Appointment::schedule(patient, dentist, request.start_time, duration)
            .map_err(|e| {
                warn!(
                    patient_id = %request.patient_id,
                    dentist_id = %request.dentist_id,
                    error = %e,
                    "Booking rejected"
                );
                AppError::from(e)
            })?;

        self.appointments.save(appointment.clone()).await?;
        info!(
            appointment_id = %appointment.id(),
            dentist_id = %request.dentist_id,
            start = %appointment.start_time(),
            "Appointment booked"
        );

        Ok(AppointmentView::from(&appointment))
    }

    async fn get(&self, id: AppointmentId) -> AppResult<AppointmentView> {
        self.appointments
            .find_by_id(id)
            .await?
            .map(|a| AppointmentView::from(&a))
            .ok_or_not_found("Appointment")
    }

    async fn list_for_dentist(&self, dentist_id: UserId) -> AppResult<Vec<AppointmentView>> {
        Ok(self
            .appointments
            .list_for_dentist(dentist_id)
            .await?
            .iter()
            .map(AppointmentView::from)
            .collect())
    }

    async fn change_dentist(
        &self,
        id: AppointmentId,
        dentist_id: UserId,
    ) -> AppResult<AppointmentView> {
        let dentist = self.load_dentist(dentist_id).await?;
        self.mutate(id, "change_dentist", move |a| a.change_dentist(dentist))
            .await
    }

    async fn change_patient(
        &self,
        id: AppointmentId,
        patient_id: PatientId,
    ) -> AppResult<AppointmentView> {
        let patient = self.load_patient(patient_id).await?;
        self.mutate(id, "change_patient", move |a| a.change_patient(patient))
            .await
    }

    async fn reschedule(
        &self,
        id: AppointmentId,
        start_time: DateTime<FixedOffset>,
    ) -> AppResult<AppointmentView> {
        self.mutate(id, "reschedule", move |a| a.change_start_time(start_time))
            .await
    }

    async fn change_duration(&self, id: AppointmentId, minutes: i64) -> AppResult<AppointmentView> {
        let duration = duration_from_minutes(minutes)?;
        self.mutate(id, "change_duration", move |a| a.change_duration(duration))
            .await
    }

    async fn cancel(&self, id: AppointmentId) -> AppResult<AppointmentView> {
        self.mutate(id, "cancel", |a| a.cancel()).await
    }

    async fn complete(
        &self,
        id: AppointmentId,
        service_ids: Vec<ServiceId>,
    ) -> AppResult<AppointmentView> {
        let mut resolved = Vec::with_capacity(service_ids.len());
        for service_id in &service_ids {
            resolved.push(self.catalog.find_by_id(*service_id).await?);
        }
        let services = require_present(resolved, "provided services")?;

        self.mutate(id, "complete", move |a| a.complete(services))
            .await
    }

    async fn pay(&self, id: AppointmentId) -> AppResult<AppointmentView> {
        self.mutate(id, "pay", |a| a.pay()).await
    }
}
