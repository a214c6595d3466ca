//! Command-line options and log setup. The terminal is owned by the
//! alternate-screen UI, so logs go to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use directories::BaseDirs;
use tracing_subscriber::EnvFilter;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".cinerate";
/// Log file name stored inside the application data directory.
const LOG_FILE_NAME: &str = "cinerate.log";

#[derive(Debug, Parser)]
#[command(name = "cinerate")]
#[command(about = "Rate anime, movies and shows from the terminal")]
pub struct Cli {
    /// Where to write logs (defaults to ~/.cinerate/cinerate.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Disable logging entirely
    #[arg(long)]
    pub no_log: bool,
}

impl Cli {
    /// Resolve the log destination, or `None` when logging is disabled.
    pub fn log_path(&self) -> Result<Option<PathBuf>> {
        if self.no_log {
            return Ok(None);
        }
        match &self.log_file {
            Some(path) => Ok(Some(path.clone())),
            None => default_log_path().map(Some),
        }
    }
}

/// Install a file-backed tracing subscriber. `RUST_LOG` wins over
/// `--log-level` when both are present.
pub fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = cli.log_path()? else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))
}

fn default_log_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from(["cinerate"]);
        assert_eq!(cli.log_level, "info");
        assert!(!cli.no_log);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn no_log_disables_path() {
        let cli = Cli::parse_from(["cinerate", "--no-log", "--log-file", "/tmp/x.log"]);
        assert!(cli.log_path().expect("resolves").is_none());
    }

    #[test]
    fn explicit_log_file_wins() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("run.log");
        let cli = Cli::parse_from([
            "cinerate",
            "--log-file",
            path.to_str().expect("utf-8 path"),
        ]);
        assert_eq!(cli.log_path().expect("resolves"), Some(path));
    }

    #[test]
    fn init_logging_creates_log_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("logs").join("cinerate.log");
        let cli = Cli::parse_from([
            "cinerate",
            "--log-file",
            path.to_str().expect("utf-8 path"),
        ]);
        init_logging(&cli).expect("logger installs");
        assert!(path.exists());
    }
}
