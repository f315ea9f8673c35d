//! Strongly-typed entity identifiers.
//!
//! `Id<E>` is a UUID tagged with the entity it names, so a `PatientId`
//! can never be passed where a `UserId` is expected. The tag is a
//! zero-sized marker and has no runtime representation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identity of one instance of entity `E`.
pub struct Id<E> {
    value: Uuid,
    // fn() -> E keeps Id Send + Sync + Copy regardless of E
    _entity: PhantomData<fn() -> E>,
}

impl<E> Id<E> {
    /// Generate a fresh random identity.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an existing raw value (e.g. loaded from storage).
    pub fn from_uuid(value: Uuid) -> Self {
        Self {
            value,
            _entity: PhantomData,
        }
    }

    /// Parse the canonical textual form.
    pub fn parse(text: &str) -> DomainResult<Self> {
        Uuid::parse_str(text)
            .map(Self::from_uuid)
            .map_err(|e| DomainError::validation(format!("invalid identifier '{}': {}", text, e)))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }
}

impl<E> Default for Id<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Id<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Id<E> {}

impl<E> PartialEq for Id<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E> Eq for Id<E> {}

impl<E> PartialOrd for Id<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Id<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<E> Hash for Id<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<E> fmt::Debug for Id<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<E> fmt::Display for Id<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<E> FromStr for Id<E> {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<E> From<Id<E>> for Uuid {
    fn from(id: Id<E>) -> Self {
        id.value
    }
}

impl<E> Serialize for Id<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for Id<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Marker;
    type MarkerId = Id<Marker>;

    #[test]
    fn test_new_ids_do_not_collide() {
        let ids: HashSet<MarkerId> = (0..1000).map(|_| MarkerId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_parse_round_trip() {
        let id = MarkerId::new();
        let parsed: MarkerId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = MarkerId::parse("not-a-uuid").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let low = MarkerId::from_uuid(Uuid::from_u128(1));
        let high = MarkerId::from_uuid(Uuid::from_u128(2));
        assert!(low < high);
        assert_eq!(low.cmp(&low), Ordering::Equal);
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = MarkerId::from_uuid(Uuid::from_u128(7));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000007\"");
        let back: MarkerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
