//! Helper functions for creating and classifying errors

use super::types::EstimatorError;

/// Exit status for configuration problems (EX_CONFIG)
pub const EXIT_CONFIG: u8 = 78;
/// Exit status for bad user input (EX_USAGE)
pub const EXIT_USAGE: u8 = 64;
/// Exit status for everything else
pub const EXIT_FAILURE: u8 = 1;

impl EstimatorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Malformed configuration or cost model
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Estimate(e) => e.is_configuration(),
            _ => false,
        }
    }

    /// Out-of-range or malformed user input
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput(_) => true,
            Self::Estimate(e) => e.is_invalid_input(),
            _ => false,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_invalid_input() {
            EXIT_USAGE
        } else if self.is_configuration() {
            EXIT_CONFIG
        } else {
            EXIT_FAILURE
        }
    }
}
