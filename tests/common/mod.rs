//! Common test utilities for test-estimator

pub mod fixtures;

pub use fixtures::ModelFactory;
