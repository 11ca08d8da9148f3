//! Subcommand handlers. Each returns whether the command succeeded.

pub mod config;
pub mod favorites;
pub mod open;
pub mod search;
