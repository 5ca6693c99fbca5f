//! Core Tutorly library (dialog controller, page workflows, config, logging).

pub mod config;
pub mod dialog;
pub mod interrupt;
pub mod logging;
pub mod workflows;
