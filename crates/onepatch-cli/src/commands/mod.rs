//! CLI command implementations.

pub mod bank;
pub mod common;
pub mod config;
pub mod convert;
pub mod info;
