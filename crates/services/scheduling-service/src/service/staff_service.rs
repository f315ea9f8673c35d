//! Staff service - Registration and credential checks for clinic staff.
//!
//! Issuing session tokens is left to whichever transport wraps this
//! service; it only answers "is this the staff member's password".

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::task;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{Email, HashedPassword, SecurePassword, User, UserRole, HASH_LENGTH, SALT_LENGTH};

use crate::repository::StaffRepository;

/// Staff registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterStaff {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

/// Staff service trait for dependency injection.
#[async_trait]
pub trait StaffService: Send + Sync {
    /// Register a new staff member
    async fn register_staff(&self, request: RegisterStaff) -> AppResult<User>;

    /// Check an email/password pair and return the matching staff member
    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of StaffService using repository.
pub struct StaffDirectory {
    repo: Arc<dyn StaffRepository>,
}

impl StaffDirectory {
    /// Create new staff service instance with repository
    pub fn new(repo: Arc<dyn StaffRepository>) -> Self {
        Self { repo }
    }
}

/// Hash on the blocking pool; PBKDF2 at 350k rounds is CPU-bound.
async fn hash_password(password: SecurePassword) -> AppResult<HashedPassword> {
    task::spawn_blocking(move || HashedPassword::from_plaintext(&password))
        .await
        .map_err(|e| AppError::internal(format!("password hashing task failed: {}", e)))
}

async fn password_matches(stored: HashedPassword, candidate: String) -> AppResult<bool> {
    task::spawn_blocking(move || stored.is_match(&candidate))
        .await
        .map_err(|e| AppError::internal(format!("password verification task failed: {}", e)))
}

#[async_trait]
impl StaffService for StaffDirectory {
    async fn register_staff(&self, request: RegisterStaff) -> AppResult<User> {
        let role: UserRole = request.role.parse()?;
        let email = Email::parse(request.email)?;
        let password = SecurePassword::parse(request.password)?;

        // Check if email already exists
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        let hashed = hash_password(password).await?;
        let mut user = User::new(request.first_name, request.last_name, role, email, hashed)?;
        user.set_phone_number(request.phone_number)?;

        let user = self.repo.create(user).await?;
        info!(user_id = %user.id(), role = %user.role(), "Staff member registered");
        Ok(user)
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        let user = match Email::try_parse(email) {
            Some(email) => self.repo.find_by_email(&email).await?,
            None => None,
        };

        // SECURITY: Run the derivation even for unknown emails so that
        // response time does not reveal which addresses are registered.
        let stored = match &user {
            Some(user) => user.password().clone(),
            None => HashedPassword::from_parts(&[0u8; HASH_LENGTH], &[0u8; SALT_LENGTH])?,
        };
        let password_valid = password_matches(stored, password.to_string()).await?;

        match user {
            Some(user) if password_valid => Ok(user),
            _ => {
                warn!("Rejected credentials");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::always;

    use crate::repository::MockStaffRepository;

    const PASSWORD: &str = "Flo55-Daily";

    fn request(role: &str, email: &str, password: &str) -> RegisterStaff {
        RegisterStaff {
            first_name: "Eva".to_string(),
            last_name: "Mendes".to_string(),
            role: role.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone_number: None,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockStaffRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().times(1).returning(Ok);

        let service = StaffDirectory::new(Arc::new(repo));
        let user = service
            .register_staff(request("dentist", "eva@clinic.com", PASSWORD))
            .await
            .unwrap();

        assert_eq!(user.role(), UserRole::Dentist);
        assert!(user.password().is_match(PASSWORD));
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_role() {
        let mut repo = MockStaffRepository::new();
        repo.expect_create().never();

        let service = StaffDirectory::new(Arc::new(repo));
        let err = service
            .register_staff(request("hygienist", "eva@clinic.com", PASSWORD))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password() {
        let mut repo = MockStaffRepository::new();
        repo.expect_create().never();

        let service = StaffDirectory::new(Arc::new(repo));
        let err = service
            .register_staff(request("admin", "eva@clinic.com", "password"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let existing = User::new(
            "Eva",
            "Mendes",
            UserRole::Admin,
            Email::parse("eva@clinic.com").unwrap(),
            HashedPassword::from_parts(&[1u8; 64], &[1u8; 64]).unwrap(),
        )
        .unwrap();

        let mut repo = MockStaffRepository::new();
        repo.expect_find_by_email()
            .with(always())
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let service = StaffDirectory::new(Arc::new(repo));
        let err = service
            .register_staff(request("receptionist", "eva@clinic.com", PASSWORD))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::conflict("Email"));
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let password = SecurePassword::parse(PASSWORD).unwrap();
        let user = User::new(
            "Eva",
            "Mendes",
            UserRole::Receptionist,
            Email::parse("eva@clinic.com").unwrap(),
            HashedPassword::from_plaintext(&password),
        )
        .unwrap();
        let user_id = user.id();

        let mut repo = MockStaffRepository::new();
        repo.expect_find_by_email()
            .returning(move |email| Ok((email.as_str() == "eva@clinic.com").then(|| user.clone())));

        let service = StaffDirectory::new(Arc::new(repo));

        let found = service
            .verify_credentials("eva@clinic.com", PASSWORD)
            .await
            .unwrap();
        assert_eq!(found.id(), user_id);

        assert_eq!(
            service
                .verify_credentials("eva@clinic.com", "Flo55-Daily!")
                .await
                .unwrap_err(),
            AppError::InvalidCredentials
        );
        assert_eq!(
            service
                .verify_credentials("ghost@clinic.com", PASSWORD)
                .await
                .unwrap_err(),
            AppError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_malformed_email_is_invalid_credentials() {
        let mut repo = MockStaffRepository::new();
        repo.expect_find_by_email().never();

        let service = StaffDirectory::new(Arc::new(repo));
        let err = service
            .verify_credentials("not-an-email", PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::InvalidCredentials);
    }
}
