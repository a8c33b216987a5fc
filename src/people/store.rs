//! In-memory person store.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::people::types::Person;

/// Collection and counter guarded together, so id assignment and append
/// are atomic with respect to concurrent creates.
#[derive(Debug)]
struct StoreInner {
    people: Vec<Person>,
    next_id: u64,
}

/// Shared handle to the in-memory person collection.
///
/// Cloning is cheap; all clones observe the same records. Insertion order
/// is preserved and identifiers increase monotonically from 1.
#[derive(Debug, Clone)]
pub struct PersonStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl PersonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                people: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store preloaded with the two demo records.
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                people: vec![
                    Person {
                        id: 1,
                        name: "Alice".to_string(),
                        age: 30,
                    },
                    Person {
                        id: 2,
                        name: "Bob".to_string(),
                        age: 25,
                    },
                ],
                next_id: 3,
            })),
        }
    }

    /// Return the full collection in insertion order.
    pub async fn list(&self) -> Vec<Person> {
        self.inner.read().await.people.clone()
    }

    /// Validate and append a new record, assigning the next identifier.
    ///
    /// This is the single source of truth for the rule "name non-empty and
    /// age > 0". On rejection the store is left untouched.
    pub async fn create(&self, name: &str, age: i64) -> Result<Person, StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if age <= 0 {
            return Err(StoreError::NonPositiveAge(age));
        }

        let mut inner = self.inner.write().await;
        let person = Person {
            id: inner.next_id,
            name: name.to_string(),
            age,
        };
        inner.next_id += 1;
        inner.people.push(person.clone());

        Ok(person)
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.people.len()
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}
