//! # CLI Layer
//!
//! One UI client for neoquery. It is the only place that parses arguments,
//! writes to stdout/stderr, installs the log subscriber and exits the process.
//!
//! - `commands`: `run()`, context setup and per-command handlers
//! - `setup`: clap definitions
//! - `print`: terminal formatting of `CmdResult`s

pub mod commands;
mod print;
mod setup;
