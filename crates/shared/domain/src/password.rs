//! Password value objects.
//!
//! `SecurePassword` is the complexity-checked plaintext, held only long
//! enough to derive a `HashedPassword`. `HashedPassword` is what gets
//! stored: a PBKDF2-HMAC-SHA-512 hash plus its random salt.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha512;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::constants::{
    HASH_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS, PBKDF2_ITERATIONS,
    SALT_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Plaintext password that satisfies the clinic's password policy.
///
/// Not `Clone` and not serialisable; the buffer is wiped on drop.
pub struct SecurePassword(Zeroizing<String>);

// Don't expose the plaintext in debug output
impl fmt::Debug for SecurePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecurePassword").field(&"[REDACTED]").finish()
    }
}

impl SecurePassword {
    /// Validate a plaintext password against the policy.
    ///
    /// # Errors
    /// Returns a validation error if the password is not 8–64 characters,
    /// lacks an uppercase letter, a lowercase letter, a digit or one of
    /// `#?!@$%^&*-`, or contains any other character.
    pub fn parse(text: impl Into<String>) -> DomainResult<Self> {
        let text = Zeroizing::new(text.into());

        let length = text.chars().count();
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(DomainError::validation(format!(
                "password must be between {} and {} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            )));
        }

        if let Some(c) = text
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !PASSWORD_SYMBOLS.contains(*c))
        {
            return Err(DomainError::validation(format!(
                "password contains a character that is not allowed: {:?}",
                c
            )));
        }

        let has_upper = text.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = text.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = text.chars().any(|c| c.is_ascii_digit());
        let has_symbol = text.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

        if !(has_upper && has_lower && has_digit && has_symbol) {
            return Err(DomainError::validation(format!(
                "password must contain an uppercase letter, a lowercase letter, a digit and one of {}",
                PASSWORD_SYMBOLS
            )));
        }

        Ok(Self(text))
    }

    /// Borrow the plaintext.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Salted, iterated one-way hash of a password.
#[derive(Clone)]
pub struct HashedPassword {
    hash: [u8; HASH_LENGTH],
    salt: [u8; SALT_LENGTH],
}

// Don't expose hash material in debug output
impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

impl HashedPassword {
    /// Hash a policy-checked password with a fresh random salt.
    pub fn from_plaintext(password: &SecurePassword) -> Self {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);

        let hash = Self::derive(password.expose(), &salt);
        Self { hash, salt }
    }

    /// Rebuild from stored bytes. No derivation is performed.
    ///
    /// # Errors
    /// Returns a validation error unless both buffers are exactly 64 bytes.
    pub fn from_parts(hash: &[u8], salt: &[u8]) -> DomainResult<Self> {
        let hash: [u8; HASH_LENGTH] = hash.try_into().map_err(|_| {
            DomainError::validation(format!("password hash must be {} bytes", HASH_LENGTH))
        })?;
        let salt: [u8; SALT_LENGTH] = salt.try_into().map_err(|_| {
            DomainError::validation(format!("password salt must be {} bytes", SALT_LENGTH))
        })?;

        Ok(Self { hash, salt })
    }

    /// Verify a candidate plaintext against this hash in constant time.
    pub fn is_match(&self, candidate: &str) -> bool {
        let computed = Self::derive(candidate, &self.salt);
        computed[..].ct_eq(&self.hash[..]).into()
    }

    /// The derived hash bytes.
    pub fn hash(&self) -> &[u8; HASH_LENGTH] {
        &self.hash
    }

    /// The salt bytes.
    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    fn derive(plaintext: &str, salt: &[u8; SALT_LENGTH]) -> [u8; HASH_LENGTH] {
        let mut out = [0u8; HASH_LENGTH];
        pbkdf2_hmac::<Sha512>(plaintext.as_bytes(), salt, PBKDF2_ITERATIONS, &mut out);
        out
    }
}

impl PartialEq for HashedPassword {
    fn eq(&self, other: &Self) -> bool {
        (self.hash[..].ct_eq(&other.hash[..]) & self.salt[..].ct_eq(&other.salt[..])).into()
    }
}

impl Eq for HashedPassword {}
