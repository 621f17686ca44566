//! anamnesis-cli library root.
//!
//! Exposes the config and record modules so integration tests can exercise
//! them without going through the command line.

pub mod aws;
pub mod config;
pub mod record;
