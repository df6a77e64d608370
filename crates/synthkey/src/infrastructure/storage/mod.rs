//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML settings file from the
//! platform-appropriate directory (or an explicit path) and falls back to
//! defaults when no file exists yet.

pub mod config;
