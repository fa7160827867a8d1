//! Core functionality for the estimator
//!
//! This module contains the cost model and the estimation logic.

pub mod estimate; // Cost model, catalog and calculator
