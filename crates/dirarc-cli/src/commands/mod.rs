//! Subcommand implementations.

pub mod create;
