use tracing::{info, warn};

use super::{ensure_data_dir, load_routes, load_students};
use crate::config::Config;
use crate::error::Result;
use crate::store::{RouteStore, StudentStore};

/// Routes added to an install that has none.
const EXAMPLE_ROUTES: &[(&str, f64, f64)] = &[
    ("North Campus", 4.5, 6.0),
    ("East Colony", 12.0, 5.0),
    ("West Market", 8.0, 5.5),
];

/// Fill empty collections with example data. Students are only seeded when
/// there are none, and ride the first two routes (or none, if missing).
pub fn seed_examples(routes: &mut RouteStore, students: &mut StudentStore) -> Result<()> {
    if routes.is_empty() {
        for (name, distance_km, rate_per_km) in EXAMPLE_ROUTES {
            routes.add_route(name, *distance_km, *rate_per_km)?;
        }
        info!(count = EXAMPLE_ROUTES.len(), "seeded example routes");
    }

    if students.is_empty() {
        let route_at = |index: usize| routes.records().get(index).map_or(0, |route| route.id);
        students.add_student("Aman Kumar", route_at(0))?;
        students.add_student("Priya Singh", route_at(1))?;
        info!("seeded example students");
    }

    Ok(())
}

/// Bring up the session's collections: create the data directory, load both
/// files and seed example data if configured.
///
/// I/O problems are logged and the affected collection starts empty, so a
/// broken data directory never stops the shell from starting. Only seeding
/// failures are returned.
pub fn load_or_seed(config: &Config) -> Result<(RouteStore, StudentStore)> {
    if let Err(err) = ensure_data_dir(&config.data_dir) {
        warn!(error = %err, "data directory unavailable");
    }

    let mut routes = RouteStore::new();
    let path = config.routes_path();
    match load_routes(&path, &mut routes) {
        Ok(_) => {}
        Err(err) if err.is_not_found() => info!(path = %path.display(), "no saved routes yet"),
        Err(err) => warn!(error = %err, "failed to load routes"),
    }

    let mut students = StudentStore::new();
    let path = config.students_path();
    match load_students(&path, &mut students) {
        Ok(_) => {}
        Err(err) if err.is_not_found() => info!(path = %path.display(), "no saved students yet"),
        Err(err) => warn!(error = %err, "failed to load students"),
    }

    if config.seed_examples {
        seed_examples(&mut routes, &mut students)?;
    }

    Ok((routes, students))
}
