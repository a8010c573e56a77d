use std::path::Path;

use super::files::{load_collection, save_collection};
use crate::error::Result;
use crate::store::RouteStore;

/// Overwrite the route file with the whole route collection.
pub fn save_routes(path: &Path, routes: &RouteStore) -> Result<()> {
    save_collection(path, routes)
}

/// Load the route file into `routes`, reseeding its id counter. All or
/// nothing: a failed load leaves `routes` as it was.
pub fn load_routes(path: &Path, routes: &mut RouteStore) -> Result<usize> {
    load_collection(path, routes)
}
