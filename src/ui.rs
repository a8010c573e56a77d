//! Line-oriented console front-end. The shell prints a numbered menu, reads
//! one selection per iteration and dispatches to the stores, billing and
//! persistence layers until the user exits.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use forms::MenuChoice;
pub use terminal::run_app;
