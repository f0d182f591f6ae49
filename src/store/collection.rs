//! Collection implementation
//!
//! BTreeMap-keyed table with its own id counter.

use std::collections::BTreeMap;

use crate::model::Id;

/// A record that can live in a `Collection`
pub trait Record: Clone {
    /// The record minus its id
    type Draft;

    /// Build the full record once an id has been assigned
    fn from_draft(id: Id, draft: Self::Draft) -> Self;

    fn id(&self) -> Id;
}

/// Keyed table of records
///
/// Ids start at 1 and are handed out in increasing order, so iterating the
/// map in key order yields insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T: Record> Collection<T> {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id to `draft`, insert it, and return the stored record
    pub fn create(&mut self, draft: T::Draft) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let record = T::from_draft(id, draft);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.records.get(&id)
    }

    /// Mutable access; only used by the enrollment progress update
    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    /// All records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// Records matching `predicate`, in insertion order
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.records.values().filter(move |r| predicate(*r))
    }

    /// First record matching `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.values().find(|r| predicate(*r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next `create` will assign
    pub fn next_id(&self) -> Id {
        self.next_id
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
