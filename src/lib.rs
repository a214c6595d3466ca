//! Core library surface for the CineRate terminal app.
//!
//! The store and view modules hold the only real rules: which entries are
//! admitted and how admitted entries are grouped for display. The `ui` module
//! is one front end built on top of them.
pub mod config;
pub mod models;
pub mod store;
pub mod ui;
pub mod view;

/// Validated insertion and its rejection reasons.
pub use store::{Alert, EntryStore, RejectionReason};

pub use models::{Category, Entry, EntryCandidate, EntryId};

/// Read-side grouping used by the ratings screen.
pub use view::{build_groups, CategoryGroup, CategoryGroups, EntryCard, PresentationMode};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
