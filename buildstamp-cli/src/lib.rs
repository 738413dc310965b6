//! Library half of the `buildstamp` CLI: config loading and renderers.

pub mod config;
pub mod render;
