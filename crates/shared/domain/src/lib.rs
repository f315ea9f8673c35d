//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! typed identities, self-validating value objects, the clinic's simple
//! entities and the `Appointment` aggregate with its booking lifecycle.

pub mod appointment;
pub mod collection;
pub mod constants;
pub mod email;
pub mod error;
pub mod identity;
pub mod password;
pub mod patient;
pub mod price;
pub mod service;
pub mod user;

mod validation;

pub use appointment::{Appointment, AppointmentId, AppointmentStatus};
pub use collection::{require_non_empty, require_present, AppendOnlyList};
pub use constants::*;
pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use identity::Id;
pub use password::{HashedPassword, SecurePassword};
pub use patient::{Patient, PatientId};
pub use price::Price;
pub use service::{Service, ServiceId};
pub use user::{User, UserId, UserRole};
