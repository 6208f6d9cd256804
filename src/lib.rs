//! Witty content generation backed by Cloudflare Workers AI.
//!
//! [`generator`] holds the prompt templates, the Workers AI client and the
//! line post-processing. [`commands`], [`config`] and [`logging`] support the
//! `punsmith` and `pungen` binaries.

pub mod commands;
pub mod config;
pub mod generator;
pub mod logging;

/// Version string shown by `--version`, including build metadata.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("PUNSMITH_GIT_SHA"),
    "\nbuilt: ",
    env!("PUNSMITH_BUILD_TS")
);
