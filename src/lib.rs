//! Core library surface for the college bus fee and route manager.
//!
//! Routes and students live in in-memory record stores, fees are computed
//! from a student's route, and both collections are persisted to versioned
//! binary files under a data directory. The `bin` target wires these pieces
//! to an interactive console menu.
pub mod billing;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

/// Persistence entry points used at startup and by the shell.
pub use db::{load_or_seed, load_routes, load_students, save_routes, save_students};

pub use billing::{calculate_fee, generate_fee_slip, summarize, FeeSlip, RouteSummary};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;

/// The two record types and their stores.
pub use models::{Route, Student};
pub use store::{RecordStore, RouteStore, StudentStore};

/// The interactive shell entry point and state container.
pub use ui::{run_app, App, MenuChoice};
