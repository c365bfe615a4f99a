use serde::{Deserialize, Serialize};

use crate::policy::ScopePolicy;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scope encoding and gate match rule for every wrapper built from this
    /// config.
    #[serde(default)]
    pub scoping: ScopePolicy,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Settings for the request lifecycle reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Clear a stale error when a request succeeds (default: true).
    #[serde(default = "default_success_clears_error")]
    pub success_clears_error: bool,
}

fn default_success_clears_error() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            success_clears_error: default_success_clears_error(),
        }
    }
}
