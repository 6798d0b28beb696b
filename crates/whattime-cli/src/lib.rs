//! CLI: interval input, configuration, message rendering

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
