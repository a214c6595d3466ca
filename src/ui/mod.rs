//! Ratatui front end: a rating form on the home screen and the grouped
//! ratings view, both driven through the store and view APIs.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
