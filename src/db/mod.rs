//! Persistence split across logical submodules: the binary collection files,
//! the receipt log, and startup loading with example seeding.

mod codec;
mod files;
mod receipts;
mod routes;
mod seed;
mod students;

pub use files::ensure_data_dir;
pub use receipts::append_fee_slip;
pub use routes::{load_routes, save_routes};
pub use seed::{load_or_seed, seed_examples};
pub use students::{load_students, save_students};
