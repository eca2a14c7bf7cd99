//! Log setup.
//!
//! The terminal belongs to the game, so records never go to stdout or
//! stderr. With a `log_file` configured they are appended there, filtered
//! by `RUST_LOG` (default `info`); without one no logger is installed and
//! the `log` macros are no-ops.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
