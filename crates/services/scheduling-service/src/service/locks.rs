//! Per-appointment write serialisation.
//!
//! The aggregate carries no version, so two writers that both load the
//! same appointment would silently overwrite each other. Every mutating
//! use case holds the appointment's lock across load, mutate and save.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use domain::AppointmentId;

/// One async mutex per appointment identity, created on demand.
#[derive(Default)]
pub struct AppointmentLocks {
    locks: Mutex<HashMap<AppointmentId, Arc<Mutex<()>>>>,
}

impl AppointmentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to one appointment.
    pub async fn acquire(&self, id: AppointmentId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Drop entries nobody holds or waits on
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(id).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of appointments currently locked or awaited.
    pub async fn tracked(&self) -> usize {
        self.locks
            .lock()
            .await
            .values()
            .filter(|lock| Arc::strong_count(lock) > 1)
            .count()
    }
}
