//! Integration tests for test-estimator
//!
//! These tests drive the public API end to end without mocking.

pub mod estimate_scenarios;
