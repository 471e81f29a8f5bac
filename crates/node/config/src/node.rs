//! Top-level node configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{AuthorityConfig, ChainConfig, ConfigError};

/// Complete configuration for a warden node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeConfig {
    /// Chain constants.
    #[serde(default)]
    pub chain: ChainConfig,

    /// Producer registry settings.
    #[serde(default)]
    pub authority: AuthorityConfig,
}

impl NodeConfig {
    /// Load configuration from `path`, or return the defaults when no path is given.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as TOML. The
    /// loaded configuration is validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&contents)?
        } else {
            Self::from_toml(&contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a JSON document.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain.gas_limit_bound_divisor == 0 {
            return Err(ConfigError::ZeroBoundDivisor);
        }
        if self.chain.min_gas_limit > self.chain.target_gas_limit {
            return Err(ConfigError::MinAboveTarget {
                min: self.chain.min_gas_limit,
                target: self.chain.target_gas_limit,
            });
        }
        let endpoint = self.authority.endpoint.as_str();
        let valid = Url::parse(endpoint).is_ok_and(|url| {
            matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
        });
        if !valid {
            return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(())
    }
}
