//! Ordered, id-indexed record collections.
//!
//! A [`RecordStore`] hands out ids from its own monotonically increasing
//! counter, so ids are never reused within a session even after removals.
//! Lookups are linear scans; collections hold at most a few thousand records.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Record, Route, Student};

/// The route collection.
pub type RouteStore = RecordStore<Route>;
/// The student collection.
pub type StudentStore = RecordStore<Student>;

/// Growable ordered collection with id assignment.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    next_id: u32,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    /// Empty store whose first id will be `1`.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, build the record with it and append it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExhausted`] when the backing storage cannot
    /// grow or the id counter would overflow. The store is left unchanged.
    pub fn insert_with<F>(&mut self, build: F) -> Result<u32>
    where
        F: FnOnce(u32) -> T,
    {
        let id = self.next_id;
        let exhausted = || Error::CapacityExhausted {
            collection: T::COLLECTION,
        };
        let following = id.checked_add(1).ok_or_else(exhausted)?;
        self.records.try_reserve(1).map_err(|_| exhausted())?;

        let record = build(id);
        debug_assert_eq!(record.id(), id);
        self.records.push(record);
        self.next_id = following;

        debug!(collection = T::COLLECTION, id, "record added");
        Ok(id)
    }

    /// Position of the record with `id`, if any.
    pub fn find_index(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// The record with `id`, if any.
    pub fn get(&self, id: u32) -> Option<&T> {
        self.find_index(id).map(|index| &self.records[index])
    }

    /// Remove the record with `id`, shifting later records up by one.
    /// Returns `None` and leaves the store untouched when the id is absent.
    pub fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.find_index(id)?;
        let removed = self.records.remove(index);
        debug!(collection = T::COLLECTION, id, "record removed");
        Some(removed)
    }

    /// Every record in insertion order, minus removals.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next insert will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Swap in a freshly loaded collection and reseed the id counter to one
    /// past the highest loaded id. An empty collection keeps the counter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptRecords`] if any id is zero or repeated, any
    /// record breaks its field rules (see [`Record::validate`]), or if
    /// the highest id leaves no room for another record. The store is left
    /// unchanged.
    pub fn replace_all(&mut self, records: Vec<T>) -> Result<()> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let id = record.id();
            if id == 0 {
                return Err(Error::corrupt(T::COLLECTION, "record with id 0"));
            }
            if !seen.insert(id) {
                return Err(Error::corrupt(T::COLLECTION, format!("duplicate id {id}")));
            }
            record
                .validate()
                .map_err(|problem| Error::corrupt(T::COLLECTION, format!("id {id}: {problem}")))?;
        }

        if let Some(max_id) = records.iter().map(Record::id).max() {
            self.next_id = max_id
                .checked_add(1)
                .ok_or_else(|| Error::corrupt(T::COLLECTION, format!("id {max_id} too large")))?;
        }
        self.records = records;

        info!(
            collection = T::COLLECTION,
            count = self.records.len(),
            next_id = self.next_id,
            "records replaced"
        );
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl RecordStore<Route> {
    /// Add a route and return its id.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::insert_with`].
    pub fn add_route(&mut self, name: &str, distance_km: f64, rate_per_km: f64) -> Result<u32> {
        self.insert_with(|id| Route::new(id, name, distance_km, rate_per_km))
    }
}

impl RecordStore<Student> {
    /// Add a student and return its id. `route_id` is not checked against the
    /// route collection.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::insert_with`].
    pub fn add_student(&mut self, name: &str, route_id: u32) -> Result<u32> {
        self.insert_with(|id| Student::new(id, name, route_id))
    }

    /// Students assigned to `route_id`, in stored order.
    pub fn on_route(&self, route_id: u32) -> impl Iterator<Item = &Student> {
        self.iter().filter(move |student| student.route_id == route_id)
    }
}
