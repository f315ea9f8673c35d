//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Staff Roles
// =============================================================================

/// Clinic administrator
pub const ROLE_ADMIN: &str = "admin";

/// Dentist, the only role that can be booked for appointments
pub const ROLE_DENTIST: &str = "dentist";

/// Front-desk receptionist
pub const ROLE_RECEPTIONIST: &str = "receptionist";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_DENTIST, ROLE_RECEPTIONIST];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Email
// =============================================================================

/// Shortest accepted email address, in characters
pub const MIN_EMAIL_LENGTH: usize = 6;

/// Longest accepted email address, in characters
pub const MAX_EMAIL_LENGTH: usize = 320;

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length requirement
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Symbols a password may (and must, at least once) contain
pub const PASSWORD_SYMBOLS: &str = "#?!@$%^&*-";

// =============================================================================
// Password Hashing
// =============================================================================

/// PBKDF2-HMAC-SHA-512 iteration count
pub const PBKDF2_ITERATIONS: u32 = 350_000;

/// Derived hash length in bytes
pub const HASH_LENGTH: usize = 64;

/// Random salt length in bytes
pub const SALT_LENGTH: usize = 64;
