//! anamnesis-core
//!
//! The patient-history record and the intake form controller that edits it.
//! Pure domain types with no I/O beyond JSON (de)serialization.

pub mod error;
pub mod form;
pub mod models;
pub mod steps;
