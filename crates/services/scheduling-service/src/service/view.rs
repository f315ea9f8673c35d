//! Response shapes returned by the use cases (safe to hand to clients).

use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::{
    Appointment, AppointmentId, AppointmentStatus, PatientId, Price, Service, ServiceId, UserId,
};

/// Provided service line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvidedServiceView {
    pub id: ServiceId,
    pub name: String,
    pub price: Price,
}

impl From<&Service> for ProvidedServiceView {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id(),
            name: service.name().to_string(),
            price: service.price(),
        }
    }
}

/// Appointment response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentView {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub patient_name: String,
    pub dentist_id: UserId,
    pub dentist_name: String,
    pub status: AppointmentStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub provided_services: Vec<ProvidedServiceView>,
}

impl From<&Appointment> for AppointmentView {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id(),
            patient_id: appointment.patient().id(),
            patient_name: appointment.patient().full_name(),
            dentist_id: appointment.dentist().id(),
            dentist_name: appointment.dentist().full_name(),
            status: appointment.status(),
            start_time: appointment.start_time(),
            end_time: appointment.end_time(),
            duration_minutes: appointment.duration().num_minutes(),
            provided_services: appointment
                .provided_services()
                .iter()
                .map(ProvidedServiceView::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use domain::{Email, HashedPassword, Patient, User, UserRole};
    use rust_decimal::Decimal;

    #[test]
    fn test_completed_appointment_json() {
        let dentist = User::new(
            "Rui",
            "Costa",
            UserRole::Dentist,
            Email::parse("rui@clinic.com").unwrap(),
            HashedPassword::from_parts(&[7u8; 64], &[8u8; 64]).unwrap(),
        )
        .unwrap();
        let mut appointment = Appointment::schedule(
            Patient::new("Ana", "Silva").unwrap(),
            dentist,
            Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
            Duration::minutes(45),
        )
        .unwrap();
        let filling = Service::new("Filling", Price::new(Decimal::new(8000, 2)).unwrap()).unwrap();
        appointment.complete([filling]).unwrap();

        let json = serde_json::to_value(AppointmentView::from(&appointment)).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["patient_name"], "Ana Silva");
        assert_eq!(json["duration_minutes"], 45);
        assert_eq!(json["end_time"], "2025-01-10T09:45:00Z");
        assert_eq!(json["provided_services"][0]["name"], "Filling");
        assert_eq!(json["provided_services"][0]["price"], "80.00");
        assert!(json.get("password").is_none());
    }
}
