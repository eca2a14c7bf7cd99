//! Burrow Dash - terminal endless runner library.
//!
//! The game state machine lives in `runner` and is driven entirely by
//! `runner::update`; the rest is the terminal plumbing around it.

pub mod app;
pub mod core;
pub mod input;
pub mod runner;
pub mod scheduler;
pub mod ui;
pub mod utils;
