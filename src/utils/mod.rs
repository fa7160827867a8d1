//! Utility modules for the estimator
//!
//! ## Module Organization
//!
//! - **error**: Crate error type, exit codes and helpers
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging
