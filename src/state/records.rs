//! Page-local record lists for the cars and categories screens.
//!
//! DESIGN
//! ======
//! A list only changes after the server confirms a mutation. A failed call
//! records an error and keeps the previous items.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::{Car, Category};

/// A server-owned record addressed by an id.
pub trait Record {
    fn record_id(&self) -> &str;
}

impl Record for Car {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Category {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Transient copy of a resource collection plus fetch status.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T: Record> RecordList<T> {
    /// Empty list waiting for its first fetch.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Replace the whole list after a successful fetch.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Append the record returned by a confirmed create.
    pub fn push_created(&mut self, record: T) {
        self.items.push(record);
        self.error = None;
    }

    /// Swap in the record returned by a confirmed update. Returns `false` if
    /// no entry has that id.
    pub fn replace_updated(&mut self, id: &str, record: T) -> bool {
        self.error = None;
        match self.items.iter_mut().find(|item| item.record_id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Apply a confirmed save: append when creating, replace when `editing`
    /// names an existing id.
    pub fn apply_saved(&mut self, editing: Option<&str>, record: T) {
        match editing {
            Some(id) => {
                if !self.replace_updated(id, record) {
                    log::warn!("updated record {id} is not in the local list");
                }
            }
            None => self.push_created(record),
        }
    }

    /// Drop the entry removed by a confirmed delete.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.record_id() != id);
        self.error = None;
    }

    /// Record a failure, keeping whatever was already listed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
