//! Process-wide traversal configuration.
//!
//! The default [`ViewConfig`] is read once from the environment the first
//! time a view is constructed and copied into every view afterwards. A view
//! can be given its own configuration with `with_config`, which is how tests
//! and callers that need a specific policy should override it.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable selecting the default [`ExhaustionPolicy`].
pub const EXHAUSTION_ENV: &str = "MATVIEW_EXHAUSTION";

/// What `next()` does once a view has produced all of its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExhaustionPolicy {
    /// Return [`ViewError::ProtocolMisuse`](crate::error::ViewError::ProtocolMisuse).
    #[default]
    Fail,
    /// Start a new cycle as if `reset()` had been called.
    ///
    /// Empty views still fail, since there is nothing to restart.
    Wrap,
}

impl FromStr for ExhaustionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "wrap" => Ok(Self::Wrap),
            other => Err(format!("unknown exhaustion policy '{other}'")),
        }
    }
}

/// Configuration carried by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewConfig {
    /// Behaviour of `next()` past the last element.
    pub exhaustion: ExhaustionPolicy,
}

impl ViewConfig {
    /// Build the configuration from the process environment.
    ///
    /// Unset variables give the default; unparsable values are reported
    /// and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(EXHAUSTION_ENV) {
            match raw.parse() {
                Ok(policy) => config.exhaustion = policy,
                Err(err) => {
                    tracing::warn!(
                        variable = EXHAUSTION_ENV,
                        value = %raw,
                        "ignoring invalid traversal configuration: {}",
                        err
                    );
                }
            }
        }
        config
    }
}

/// Global default configuration, resolved on first use.
pub static VIEW_CONFIG: Lazy<ViewConfig> = Lazy::new(ViewConfig::from_env);

/// Get the process-wide default configuration.
pub fn view_config() -> &'static ViewConfig {
    &VIEW_CONFIG
}

/// Builder for a custom [`ViewConfig`].
#[derive(Debug, Clone)]
pub struct ViewConfigBuilder {
    config: ViewConfig,
}

impl ViewConfigBuilder {
    /// Create a builder starting from the process-wide default.
    pub fn new() -> Self {
        Self {
            config: *view_config(),
        }
    }

    /// Set the exhaustion policy.
    pub fn exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.config.exhaustion = policy;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ViewConfig {
        self.config
    }
}

impl Default for ViewConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("fail".parse::<ExhaustionPolicy>(), Ok(ExhaustionPolicy::Fail));
        assert_eq!(" Wrap ".parse::<ExhaustionPolicy>(), Ok(ExhaustionPolicy::Wrap));
        assert!("loop".parse::<ExhaustionPolicy>().is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = ViewConfigBuilder::new()
            .exhaustion(ExhaustionPolicy::Wrap)
            .build();
        assert_eq!(config.exhaustion, ExhaustionPolicy::Wrap);

        let config = ViewConfigBuilder::new()
            .exhaustion(ExhaustionPolicy::Fail)
            .build();
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_global_config() {
        let config1 = view_config();
        let config2 = view_config();

        // Should return the same instance
        assert!(std::ptr::eq(config1, config2));
    }
}
