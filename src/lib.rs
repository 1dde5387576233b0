//! Command-line front end for the xiangqi engine
//!
//! ## Module Organization
//!
//! - `settings` - Persisted CLI settings (search configuration, opening book sources)
//! - `commands` - The analyze, selfplay, replay and play subcommands

pub mod commands;
pub mod settings;

pub use settings::Settings;
