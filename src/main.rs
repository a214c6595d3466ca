//! Binary entry point: parse options, start file logging, and drive the
//! Ratatui event loop until the user exits. Entries live only for the
//! duration of the session.
use cinerate::config::{init_logging, Cli};
use cinerate::{run_app, App, EntryStore};
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    info!("starting cinerate");

    let mut app = App::new(EntryStore::new());
    let result = run_app(&mut app);

    info!(entries = app.store().len(), "session ended");
    result
}
