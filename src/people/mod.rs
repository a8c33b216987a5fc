//! Person records and the in-memory store that owns them.

pub mod store;
pub mod types;

pub use store::PersonStore;
pub use types::{NewPerson, Person};
