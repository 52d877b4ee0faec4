//! Domain logic for the submission intake service.
//!
//! Validation, record formatting and the append-only flat-file store live
//! here so the HTTP crate stays a thin adapter.

pub mod csv;
pub mod error;
pub mod storage;
pub mod submission;
pub mod types;
pub mod validation;
