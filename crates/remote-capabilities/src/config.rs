//! # Remote Capabilities Configuration
//!
//! Loaded from TOML by the node runtime.
//!
//! ```toml
//! # Hex-encoded Ed25519 public key of this node
//! local_peer_id = "6a1f...e2"
//! # Identical responses required before a result is accepted (F + 1)
//! min_identical_responses = 3
//! ```

use crate::domain::peer::PeerId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Runtime configuration for message authentication and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteCapabilitiesConfig {
    /// Identity inbound messages must be addressed to.
    pub local_peer_id: PeerId,
    /// Floor of byte-identical responses for the mode aggregator.
    pub min_identical_responses: u32,
}

impl Default for RemoteCapabilitiesConfig {
    fn default() -> Self {
        Self {
            local_peer_id: PeerId::default(),
            min_identical_responses: 1,
        }
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// `local_peer_id` was left at the all-zero default.
    #[error("local_peer_id is not set")]
    MissingLocalPeerId,

    /// A zero floor would accept any single response.
    #[error("min_identical_responses must be at least 1")]
    ZeroQuorum,
}

impl RemoteCapabilitiesConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would disable authentication or quorum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.local_peer_id.is_zero() {
            return Err(ConfigError::MissingLocalPeerId);
        }
        if self.min_identical_responses == 0 {
            return Err(ConfigError::ZeroQuorum);
        }
        Ok(())
    }
}
