//! Staff user entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_DENTIST, ROLE_RECEPTIONIST};
use crate::email::Email;
use crate::error::{DomainError, DomainResult};
use crate::identity::Id;
use crate::password::HashedPassword;
use crate::validation::{optional_text, required_text};

/// Identity of a [`User`].
pub type UserId = Id<User>;

/// Staff roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin = 0,
    Dentist = 1,
    Receptionist = 2,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can be booked for appointments
    pub fn is_dentist(&self) -> bool {
        matches!(self, UserRole::Dentist)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Dentist => ROLE_DENTIST,
            UserRole::Receptionist => ROLE_RECEPTIONIST,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_DENTIST => Ok(UserRole::Dentist),
            ROLE_RECEPTIONIST => Ok(UserRole::Receptionist),
            other => Err(DomainError::validation(format!("unknown role '{}'", other))),
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Numeric form, as stored by the persistence layer.
impl TryFrom<i32> for UserRole {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::Admin),
            1 => Ok(UserRole::Dentist),
            2 => Ok(UserRole::Receptionist),
            other => Err(DomainError::validation(format!("unknown role value {}", other))),
        }
    }
}

impl From<UserRole> for i32 {
    fn from(role: UserRole) -> Self {
        role as i32
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff member entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    role: UserRole,
    email: Email,
    #[serde(skip_serializing)]
    password: HashedPassword,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
}

impl User {
    /// Create a staff member with a fresh identity
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: UserRole,
        email: Email,
        password: HashedPassword,
    ) -> DomainResult<Self> {
        Self::with_id(UserId::new(), first_name, last_name, role, email, password)
    }

    /// Create a staff member with a known identity (e.g. when loading)
    pub fn with_id(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: UserRole,
        email: Email,
        password: HashedPassword,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            first_name: required_text(first_name, "first name")?,
            last_name: required_text(last_name, "last name")?,
            role,
            email,
            password,
            phone_number: None,
        })
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> DomainResult<Self> {
        self.set_phone_number(Some(phone_number.into()))?;
        Ok(self)
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &HashedPassword {
        &self.password
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Check if user has the dentist role
    pub fn is_dentist(&self) -> bool {
        self.role.is_dentist()
    }

    /// Update user's names. Neither changes unless both are valid.
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

    /// Update user's email. Uniqueness is checked by the caller's store.
    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }

    /// Replace the stored password hash
    pub fn change_password(&mut self, password: HashedPassword) {
        self.password = password;
    }

    /// Set or clear the phone number; a present number must not be blank.
    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> DomainResult<()> {
        self.phone_number = optional_text(phone_number, "phone number")?;
        Ok(())
    }
}
