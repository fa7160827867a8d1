//! Default project parameters

use crate::core::estimate::{ComplexityTier, SampleCount};
use serde::{Deserialize, Serialize};

/// Values used when the caller does not supply them
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    /// Number of samples (UUTs)
    #[serde(default)]
    pub samples: SampleCount,
    /// Sample complexity
    #[serde(default)]
    pub complexity: ComplexityTier,
}
