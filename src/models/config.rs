use serde::Deserialize;
use std::fmt;

use crate::error::ScaleError;

/// How degenerate data (zero-mean rows, a flat normalized image) is handled.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Reject degenerate images with a typed error
    #[default]
    Strict,
    /// Let IEEE-754 `inf`/`nan` flow through and saturate on the final cast
    Unguarded,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::Strict => write!(f, "strict"),
            DegeneratePolicy::Unguarded => write!(f, "unguarded"),
        }
    }
}

/// Options for [`GradientScaler`](crate::services::GradientScaler).
///
/// Options only pick how degenerate input is treated; the normalization
/// arithmetic itself is fixed.
///
/// Can be embedded in a host application's YAML config:
///
/// ```yaml
/// policy: unguarded
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleOptions {
    /// Degenerate-data policy (default: strict)
    pub policy: DegeneratePolicy,
}

impl ScaleOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the degenerate-data policy.
    #[inline]
    pub fn policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse options from a YAML document. Missing fields take defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ScaleError> {
        let options: Self = serde_yaml::from_str(content)?;
        tracing::debug!(policy = %options.policy, "Loaded scale options");
        Ok(options)
    }
}
