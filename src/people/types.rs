//! Person record types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored person record.
///
/// The identifier is assigned by the store on creation and never changes;
/// records are never deleted or mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    /// Unique identifier assigned by the store.
    pub id: u64,
    /// Person's name.
    pub name: String,
    /// Person's age in years.
    pub age: i64,
}

/// Expected JSON body for creating a person.
///
/// Missing fields default to zero values and are rejected by validation,
/// so `{}` fails with the validation message rather than a parse error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewPerson {
    /// Person's name. Must be non-empty.
    #[serde(default)]
    pub name: String,
    /// Person's age in years. Must be positive.
    #[serde(default)]
    pub age: i64,
}
