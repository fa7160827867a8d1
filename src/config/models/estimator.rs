//! Top-level estimator configuration

use super::*;
use crate::core::estimate::CostModel;
use serde::{Deserialize, Serialize};

/// Everything the estimator reads from its config file
///
/// Every section is optional; an empty file yields the built-in cost model.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EstimatorConfig {
    /// Steps, substeps and their formulas
    #[serde(default)]
    pub model: CostModel,
    /// Default project parameters
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Rendering options
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging options
    #[serde(default)]
    pub logging: LoggingConfig,
}
