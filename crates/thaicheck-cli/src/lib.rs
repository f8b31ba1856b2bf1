//! CLI library components for the Thai identity validator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
