//! Domain models for the two record collections. Both types stay plain data
//! holders; the stores, billing and persistence layers own the behavior.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

/// Longest name kept on a route or student, in characters. Longer input is
/// truncated when the record is created.
pub const MAX_NAME_LEN: usize = 63;

/// Anything that lives in a [`RecordStore`](crate::store::RecordStore).
pub trait Record {
    /// Human-readable collection name used in errors and logs.
    const COLLECTION: &'static str;

    /// The record's unique, non-zero id.
    fn id(&self) -> u32;

    /// Check the field rules a freshly created record always satisfies.
    /// Returns a description of the first broken rule.
    fn validate(&self) -> Result<(), String>;
}

fn check_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(format!("name is {len} characters, limit is {MAX_NAME_LEN}"));
    }
    Ok(())
}

fn check_amount(value: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} {value} is not a non-negative number"));
    }
    Ok(())
}

/// A bus route. Distance and rate drive the fee computed for every student
/// assigned to it.
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Route {
    /// Unique id assigned by the route store.
    pub id: u32,
    /// Display name, at most [`MAX_NAME_LEN`] characters.
    pub name: String,
    /// One-way distance in kilometres.
    pub distance_km: f64,
    /// Charge per kilometre.
    pub rate_per_km: f64,
}

impl Route {
    /// Build a route, truncating an over-long name.
    pub fn new(id: u32, name: &str, distance_km: f64, rate_per_km: f64) -> Self {
        Self {
            id,
            name: truncate_name(name),
            distance_km,
            rate_per_km,
        }
    }
}

impl Record for Route {
    const COLLECTION: &'static str = "route";

    fn id(&self) -> u32 {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        check_name(&self.name)?;
        check_amount(self.distance_km, "distance")?;
        check_amount(self.rate_per_km, "rate")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | Distance: {:.2} km | Rate: {:.2} per km",
            self.id, self.name, self.distance_km, self.rate_per_km
        )
    }
}

/// A student who may ride one route.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Student {
    /// Unique id assigned by the student store.
    pub id: u32,
    /// Display name, at most [`MAX_NAME_LEN`] characters.
    pub name: String,
    /// Assigned route. `0` means unassigned; an id with no matching route is
    /// kept as-is and simply bills nothing.
    pub route_id: u32,
}

impl Student {
    /// Build a student, truncating an over-long name.
    pub fn new(id: u32, name: &str, route_id: u32) -> Self {
        Self {
            id,
            name: truncate_name(name),
            route_id,
        }
    }

    /// Whether the student has any route assigned at all.
    pub fn has_route(&self) -> bool {
        self.route_id != 0
    }
}

impl Record for Student {
    const COLLECTION: &'static str = "student";

    fn id(&self) -> u32 {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        check_name(&self.name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | Route ID: {}",
            self.id, self.name, self.route_id
        )
    }
}

/// Cut a name down to [`MAX_NAME_LEN`] characters without splitting a
/// multi-byte character.
pub fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}
