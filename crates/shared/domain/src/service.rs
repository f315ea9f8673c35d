//! Billable clinic service entity.

use serde::Serialize;

use crate::error::DomainResult;
use crate::identity::Id;
use crate::price::Price;
use crate::validation::required_text;

/// Identity of a [`Service`].
pub type ServiceId = Id<Service>;

/// A treatment or procedure the clinic charges for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    id: ServiceId,
    name: String,
    price: Price,
}

impl Service {
    /// Create a service with a fresh identity.
    pub fn new(name: impl Into<String>, price: Price) -> DomainResult<Self> {
        Self::with_id(ServiceId::new(), name, price)
    }

    /// Create a service with a known identity (e.g. when loading).
    pub fn with_id(id: ServiceId, name: impl Into<String>, price: Price) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: required_text(name, "service name")?,
            price,
        })
    }

    pub fn id(&self) -> ServiceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Rename the service
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = required_text(name, "service name")?;
        Ok(())
    }

    /// Change what the service costs
    pub fn reprice(&mut self, price: Price) {
        self.price = price;
    }
}
