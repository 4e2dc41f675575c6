use serde::{Deserialize, Serialize};

/// What the demand and price mutators do with input that is not numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NonNumericPolicy {
    /// Return an error and keep the stored value.
    #[default]
    Reject,
    /// Store zero.
    Zero,
}

/// Per-province behavior toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceConfig {
    pub non_numeric: NonNumericPolicy,
    /// Reject producers with negative cost or production at construction.
    /// `add_producer` never validates.
    pub validate_producers: bool,
}

impl Default for ProvinceConfig {
    fn default() -> Self {
        Self {
            non_numeric: NonNumericPolicy::Reject,
            validate_producers: false,
        }
    }
}

impl ProvinceConfig {
    pub fn with_non_numeric(mut self, policy: NonNumericPolicy) -> Self {
        self.non_numeric = policy;
        self
    }

    pub fn with_producer_validation(mut self) -> Self {
        self.validate_producers = true;
        self
    }
}
