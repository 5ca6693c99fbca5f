//! CLI command handlers.

pub mod config;
pub mod demo;
pub mod dialog;
