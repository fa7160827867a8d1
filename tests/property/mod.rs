//! Property-based tests for the calculator

pub mod estimate_properties;
