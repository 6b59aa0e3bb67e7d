//! This crate is intended to contain code that is required to provide or
//! improve the observability of a system. That currently means the
//! initialization logic for logging shared between the binaries.
pub mod tracing;
