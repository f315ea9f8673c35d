//! Application use cases.

mod container;
mod locks;
mod scheduling_service;
mod staff_service;
mod view;

pub use container::Services;
pub use locks::AppointmentLocks;
pub use scheduling_service::{BookAppointment, Scheduler, SchedulingService};
pub use staff_service::{RegisterStaff, StaffDirectory, StaffService};
pub use view::{AppointmentView, ProvidedServiceView};
