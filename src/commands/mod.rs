//! Subcommand implementations shared by the `punsmith` and `pungen` binaries.

pub mod config;
pub mod generate;
pub mod prompt;
