//! Binary entry point: set up logging, load (or seed) the route and student
//! collections from the data directory, then run the console menu until the
//! user exits. Exiting saves both collections.
use std::io::{self, IsTerminal};

use anyhow::Context;
use bus_fee_manager::{init_logging, load_or_seed, run_app, App, Config};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    init_logging(Level::WARN);

    let config = Config::default();
    let (routes, students) = load_or_seed(&config).context("failed to prepare session data")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let mut app = App::new(config, routes, students, stdin.lock(), stdout).styled(styled);
    run_app(&mut app)
}
