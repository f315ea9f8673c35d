//! Appointment aggregate.
//!
//! The only place in the domain with a lifecycle:
//!
//! ```text
//! [Scheduled] ──cancel──→ [Cancelled]
//!      │
//!      └──complete──→ [Completed] ──pay──→ [Paid]
//! ```
//!
//! While `Scheduled` the patient, dentist, start time and duration can be
//! changed. Every operation checks the status first, then its arguments,
//! and leaves the aggregate untouched when it fails.
//!
//! There is no version field. Callers must serialise writers per
//! appointment (load, apply one operation, save) or concurrent edits will
//! overwrite each other.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::{require_non_empty, AppendOnlyList};
use crate::error::{DomainError, DomainResult};
use crate::identity::Id;
use crate::patient::Patient;
use crate::service::Service;
use crate::user::User;

/// Identity of an [`Appointment`].
pub type AppointmentId = Id<Appointment>;

/// Lifecycle status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
    Completed,
    Paid,
}

impl AppointmentStatus {
    /// No transition leaves a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::Paid)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Paid => "paid",
        };
        f.write_str(name)
    }
}

/// A booked visit of one patient with one dentist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: AppointmentId,
    patient: Patient,
    dentist: User,
    status: AppointmentStatus,
    start_time: DateTime<Utc>,
    duration: Duration,
    provided_services: AppendOnlyList<Service>,
}

impl Appointment {
    /// Book a new appointment in `Scheduled` status.
    ///
    /// # Errors
    /// - `Validation` if `dentist` does not have the dentist role or
    ///   `start_time` is not expressed in UTC.
    /// - `OutOfRange` if `duration` is not positive or the end time would
    ///   overflow.
    pub fn schedule(
        patient: Patient,
        dentist: User,
        start_time: impl Into<DateTime<FixedOffset>>,
        duration: Duration,
    ) -> DomainResult<Self> {
        Self::schedule_with_id(AppointmentId::new(), patient, dentist, start_time, duration)
    }

    /// Same as [`Appointment::schedule`] with a caller-chosen identity.
    pub fn schedule_with_id(
        id: AppointmentId,
        patient: Patient,
        dentist: User,
        start_time: impl Into<DateTime<FixedOffset>>,
        duration: Duration,
    ) -> DomainResult<Self> {
        ensure_dentist(&dentist)?;
        let start_time = require_utc(start_time.into())?;
        ensure_positive(duration)?;
        ensure_end_representable(start_time, duration)?;

        Ok(Self {
            id,
            patient,
            dentist,
            status: AppointmentStatus::Scheduled,
            start_time,
            duration,
            provided_services: AppendOnlyList::new(),
        })
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn dentist(&self) -> &User {
        &self.dentist
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Always `start_time + duration`.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + self.duration
    }

    /// Services recorded when the appointment was completed.
    pub fn provided_services(&self) -> &[Service] {
        self.provided_services.as_slice()
    }

    /// Assign a different dentist.
    pub fn change_dentist(&mut self, dentist: User) -> DomainResult<()> {
        self.ensure_status(AppointmentStatus::Scheduled, "change the dentist of")?;
        ensure_dentist(&dentist)?;
        self.dentist = dentist;
        Ok(())
    }

    /// Assign a different patient.
    pub fn change_patient(&mut self, patient: Patient) -> DomainResult<()> {
        self.ensure_status(AppointmentStatus::Scheduled, "change the patient of")?;
        self.patient = patient;
        Ok(())
    }

    /// Move the appointment. The new start must be expressed in UTC.
    pub fn change_start_time(
        &mut self,
        start_time: impl Into<DateTime<FixedOffset>>,
    ) -> DomainResult<()> {
        self.ensure_status(AppointmentStatus::Scheduled, "reschedule")?;
        let start_time = require_utc(start_time.into())?;
        ensure_end_representable(start_time, self.duration)?;
        self.start_time = start_time;
        Ok(())
    }

    /// Change how long the appointment lasts. Must stay positive.
    pub fn change_duration(&mut self, duration: Duration) -> DomainResult<()> {
        self.ensure_status(AppointmentStatus::Scheduled, "change the duration of")?;
        ensure_positive(duration)?;
        ensure_end_representable(self.start_time, duration)?;
        self.duration = duration;
        Ok(())
    }

    /// `Scheduled` → `Cancelled`.
    pub fn cancel(&mut self) -> DomainResult<()> {
        self.ensure_status(AppointmentStatus::Scheduled, "cancel")?;
        self.status = AppointmentStatus::Cancelled;
        Ok(())
    }

    /// Record the services provided and move `Scheduled` → `Completed`.
    ///
    /// # Errors
    /// `InvalidState` unless scheduled; `Validation` if `services` is empty.
    pub fn complete(&mut self, services: impl IntoIterator<Item = Service>) -> DomainResult<()> {
        self.ensure_status(AppointmentStatus::Scheduled, "complete")?;
        let services = require_non_empty(services.into_iter().collect(), "provided services")?;
        self.provided_services.extend(services);
        self.status = AppointmentStatus::Completed;
        Ok(())
    }

    /// `Completed` → `Paid`.
    pub fn pay(&mut self) -> DomainResult<()> {
        self.ensure_status(AppointmentStatus::Completed, "pay")?;
        self.status = AppointmentStatus::Paid;
        Ok(())
    }

    fn ensure_status(&self, required: AppointmentStatus, action: &str) -> DomainResult<()> {
        if self.status != required {
            return Err(DomainError::invalid_state(format!(
                "cannot {} an appointment that is {} (must be {})",
                action, self.status, required
            )));
        }
        Ok(())
    }
}

fn ensure_dentist(user: &User) -> DomainResult<()> {
    if !user.is_dentist() {
        return Err(DomainError::validation(format!(
            "user {} has role {} and cannot be booked as a dentist",
            user.id(),
            user.role()
        )));
    }
    Ok(())
}

fn require_utc(start_time: DateTime<FixedOffset>) -> DomainResult<DateTime<Utc>> {
    if start_time.offset().local_minus_utc() != 0 {
        return Err(DomainError::validation(format!(
            "start time must be in UTC, got offset {}",
            start_time.offset()
        )));
    }
    Ok(start_time.with_timezone(&Utc))
}

fn ensure_positive(duration: Duration) -> DomainResult<()> {
    if duration <= Duration::zero() {
        return Err(DomainError::out_of_range(format!(
            "duration must be positive, got {} seconds",
            duration.num_seconds()
        )));
    }
    Ok(())
}

fn ensure_end_representable(start_time: DateTime<Utc>, duration: Duration) -> DomainResult<()> {
    start_time
        .checked_add_signed(duration)
        .map(|_| ())
        .ok_or_else(|| DomainError::out_of_range("appointment end time is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::Email;
    use crate::password::HashedPassword;
    use crate::price::Price;
    use crate::user::UserRole;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn staff(role: UserRole) -> User {
        User::new(
            "Rui",
            "Costa",
            role,
            Email::parse("rui@clinic.com").unwrap(),
            HashedPassword::from_parts(&[0u8; 64], &[0u8; 64]).unwrap(),
        )
        .unwrap()
    }

    fn patient() -> Patient {
        Patient::new("Ana", "Silva").unwrap()
    }

    fn service(name: &str) -> Service {
        Service::new(name, Price::new(Decimal::new(5000, 2)).unwrap()).unwrap()
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
    }

    fn scheduled() -> Appointment {
        Appointment::schedule(patient(), staff(UserRole::Dentist), start(), Duration::hours(1))
            .unwrap()
    }

    fn completed() -> Appointment {
        let mut appointment = scheduled();
        appointment.complete(vec![service("Check-up")]).unwrap();
        appointment
    }

    fn cancelled() -> Appointment {
        let mut appointment = scheduled();
        appointment.cancel().unwrap();
        appointment
    }

    fn paid() -> Appointment {
        let mut appointment = completed();
        appointment.pay().unwrap();
        appointment
    }

    #[test]
    fn test_new_appointment_is_scheduled_and_empty() {
        let appointment = scheduled();
        assert_eq!(appointment.status(), AppointmentStatus::Scheduled);
        assert!(appointment.provided_services().is_empty());
        assert_eq!(
            appointment.end_time(),
            Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_non_dentist_rejected() {
        for role in [UserRole::Admin, UserRole::Receptionist] {
            let err = Appointment::schedule(patient(), staff(role), start(), Duration::hours(1))
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        for minutes in [0, -1, -90] {
            let err = Appointment::schedule(
                patient(),
                staff(UserRole::Dentist),
                start(),
                Duration::minutes(minutes),
            )
            .unwrap_err();
            assert!(matches!(err, DomainError::OutOfRange(_)));
        }
    }

    #[test]
    fn test_non_utc_start_rejected() {
        let lisbon_summer = FixedOffset::east_opt(3600).unwrap();
        let local = lisbon_summer.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap();

        let err = Appointment::schedule(patient(), staff(UserRole::Dentist), local, Duration::hours(1))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let mut appointment = scheduled();
        let err = appointment.change_start_time(local).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(appointment.start_time(), start());
    }

    #[test]
    fn test_zero_offset_counts_as_utc() {
        let zero = FixedOffset::east_opt(0).unwrap();
        let at = zero.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        let appointment =
            Appointment::schedule(patient(), staff(UserRole::Dentist), at, Duration::minutes(30))
                .unwrap();
        assert_eq!(appointment.start_time(), start());
    }

    #[test]
    fn test_end_time_overflow_rejected() {
        let err = Appointment::schedule(
            patient(),
            staff(UserRole::Dentist),
            DateTime::<Utc>::MAX_UTC,
            Duration::minutes(1),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange(_)));
    }

    #[test]
    fn test_end_time_tracks_every_change() {
        let mut appointment = scheduled();

        let later = Utc.with_ymd_and_hms(2025, 1, 11, 14, 30, 0).unwrap();
        appointment.change_start_time(later).unwrap();
        assert_eq!(appointment.end_time(), later + Duration::hours(1));

        appointment.change_duration(Duration::minutes(45)).unwrap();
        assert_eq!(appointment.end_time(), later + Duration::minutes(45));
        assert_eq!(
            appointment.end_time(),
            appointment.start_time() + appointment.duration()
        );
    }

    #[test]
    fn test_change_duration_rejects_non_positive() {
        let mut appointment = scheduled();
        for minutes in [0, -15] {
            let err = appointment
                .change_duration(Duration::minutes(minutes))
                .unwrap_err();
            assert!(matches!(err, DomainError::OutOfRange(_)));
        }
        assert_eq!(appointment.duration(), Duration::hours(1));
    }

    #[test]
    fn test_change_dentist_requires_dentist_role() {
        let mut appointment = scheduled();
        let original = appointment.dentist().id();

        let err = appointment
            .change_dentist(staff(UserRole::Receptionist))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(appointment.dentist().id(), original);

        let replacement = staff(UserRole::Dentist);
        let replacement_id = replacement.id();
        appointment.change_dentist(replacement).unwrap();
        assert_eq!(appointment.dentist().id(), replacement_id);
    }

    #[test]
    fn test_change_patient() {
        let mut appointment = scheduled();
        let other = Patient::new("Joana", "Costa").unwrap();
        let other_id = other.id();
        appointment.change_patient(other).unwrap();
        assert_eq!(appointment.patient().id(), other_id);
    }

    #[test]
    fn test_changes_require_scheduled() {
        for mut appointment in [cancelled(), completed(), paid()] {
            let status = appointment.status();
            assert!(appointment
                .change_dentist(staff(UserRole::Dentist))
                .unwrap_err()
                .is_invalid_state());
            assert!(appointment
                .change_patient(patient())
                .unwrap_err()
                .is_invalid_state());
            assert!(appointment
                .change_start_time(start())
                .unwrap_err()
                .is_invalid_state());
            assert!(appointment
                .change_duration(Duration::minutes(10))
                .unwrap_err()
                .is_invalid_state());
            assert_eq!(appointment.status(), status);
        }
    }

    #[test]
    fn test_cancel_twice_fails() {
        let mut appointment = scheduled();
        appointment.cancel().unwrap();
        assert_eq!(appointment.status(), AppointmentStatus::Cancelled);
        assert!(appointment.cancel().unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_cancel_only_from_scheduled() {
        for mut appointment in [completed(), paid()] {
            assert!(appointment.cancel().unwrap_err().is_invalid_state());
        }
    }

    #[test]
    fn test_complete_requires_services() {
        let mut appointment = scheduled();
        let err = appointment.complete(Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(appointment.status(), AppointmentStatus::Scheduled);
        assert!(appointment.provided_services().is_empty());
    }

    #[test]
    fn test_complete_records_services_in_order() {
        let mut appointment = scheduled();
        let cleaning = service("Cleaning");
        let x_ray = service("X-ray");

        appointment
            .complete(vec![cleaning.clone(), x_ray.clone()])
            .unwrap();

        assert_eq!(appointment.status(), AppointmentStatus::Completed);
        assert_eq!(appointment.provided_services(), &[cleaning, x_ray]);
    }

    #[test]
    fn test_complete_only_from_scheduled() {
        for mut appointment in [cancelled(), completed(), paid()] {
            let before = appointment.provided_services().len();
            let err = appointment.complete(vec![service("Filling")]).unwrap_err();
            assert!(err.is_invalid_state());
            assert_eq!(appointment.provided_services().len(), before);
        }
    }

    #[test]
    fn test_status_checked_before_arguments() {
        let mut appointment = cancelled();
        let err = appointment.complete(Vec::new()).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_pay_only_from_completed() {
        let mut appointment = completed();
        appointment.pay().unwrap();
        assert_eq!(appointment.status(), AppointmentStatus::Paid);

        for mut appointment in [scheduled(), cancelled(), paid()] {
            assert!(appointment.pay().unwrap_err().is_invalid_state());
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(AppointmentStatus::Paid.is_terminal());
        assert!(!AppointmentStatus::Scheduled.is_terminal());
        assert!(!AppointmentStatus::Completed.is_terminal());
    }
}
