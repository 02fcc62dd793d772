//! CLI library components for the roster name splitter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
