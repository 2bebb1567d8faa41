///! Neowatch command-line front-end
///!
///! Loads the two datasets, builds the in-memory database, and exposes
///! `query`, `inspect`, `search`, and `fetch` subcommands over it.

pub mod commands;
pub mod config;
pub mod logging;
pub mod write;
