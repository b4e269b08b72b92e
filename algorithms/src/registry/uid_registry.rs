//! Sorted set of unique identifiers for one entity kind.
//!
//! Membership goes through `binary_search`; insertion through
//! `lower_bound`, so `ids` is strictly ascending after every call.

use std::fmt::Display;

use thiserror::Error;

use crate::searching::{binary_search, lower_bound};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{kind} uid `{id}` already exists")]
    Duplicate { kind: String, id: String },
    #[error("{kind} uid `{id}` not found")]
    NotFound { kind: String, id: String },
}

#[derive(Debug, Clone)]
pub struct UidRegistry<K> {
    kind: String,
    ids: Vec<K>,
}

impl<K: Ord + Display> UidRegistry<K> {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ids: Vec::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn add(&mut self, id: K) -> Result<(), RegistryError> {
        let at = lower_bound(&self.ids, &id);
        if self.ids.get(at) == Some(&id) {
            return Err(RegistryError::Duplicate {
                kind: self.kind.clone(),
                id: id.to_string(),
            });
        }
        tracing::trace!(kind = %self.kind, %id, at, "uid added");
        self.ids.insert(at, id);
        Ok(())
    }

    pub fn remove(&mut self, id: &K) -> Result<K, RegistryError> {
        match binary_search(&self.ids, id) {
            Some(at) => Ok(self.ids.remove(at)),
            None => Err(RegistryError::NotFound {
                kind: self.kind.clone(),
                id: id.to_string(),
            }),
        }
    }

    pub fn contains(&self, id: &K) -> bool {
        binary_search(&self.ids, id).is_some()
    }

    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
