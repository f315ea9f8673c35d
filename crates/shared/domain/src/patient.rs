//! Patient entity.

use serde::Serialize;

use crate::email::Email;
use crate::error::DomainResult;
use crate::identity::Id;
use crate::validation::{optional_text, required_text};

/// Identity of a [`Patient`].
pub type PatientId = Id<Patient>;

/// A person treated at the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: PatientId,
    first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Patient {
    /// Create a patient with a fresh identity.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> DomainResult<Self> {
        Self::with_id(PatientId::new(), first_name, last_name)
    }

    /// Create a patient with a known identity (e.g. when loading).
    pub fn with_id(
        id: PatientId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            first_name: required_text(first_name, "first name")?,
            middle_name: None,
            last_name: required_text(last_name, "last name")?,
            email: None,
            phone_number: None,
            notes: None,
        })
    }

    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> DomainResult<Self> {
        self.set_phone_number(Some(phone_number.into()))?;
        Ok(self)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// "First Middle Last", skipping an absent middle name.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Replace first and last name. Neither changes unless both are valid.
    pub fn rename(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> DomainResult<()> {
        let first_name = required_text(first_name, "first name")?;
        let last_name = required_text(last_name, "last name")?;
        self.first_name = first_name;
        self.last_name = last_name;
        Ok(())
    }

    pub fn set_middle_name(&mut self, middle_name: Option<String>) {
        self.middle_name = middle_name;
    }

    pub fn set_email(&mut self, email: Option<Email>) {
        self.email = email;
    }

    /// Set or clear the phone number; a present number must not be blank.
    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> DomainResult<()> {
        self.phone_number = optional_text(phone_number, "phone number")?;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }
}
