//! In-memory entry store split across logical submodules.

mod entries;
mod rejection;

pub use entries::EntryStore;
pub use rejection::{Alert, RejectionReason};
