// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment configuration file.
//!
//! ```toml
//! [networks.base_goerli]
//! url = "https://goerli.base.org"
//!
//! [named_accounts.RemoteAliERC20v2]
//! base_goerli = "0x..."
//! localhost = 1
//! ```
//!
//! Networks given here override or extend the built-in ones. Named accounts are merged with the
//! well-known defaults, see [`NamedAccounts::with_defaults`].

use std::{collections::BTreeMap, fs, io, path::Path};

use serde::Deserialize;

use crate::core::{accounts::NamedAccounts, network::Network};

/// Default name of the configuration file.
pub const CONFIG_FILE: &str = "deploy.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    #[serde(default)]
    networks: BTreeMap<String, NetworkConfig>,
    #[serde(default)]
    named_accounts: NamedAccounts,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NetworkConfig {
    url: Option<String>,
    chain_id: Option<u64>,
    live: Option<bool>,
    save_deployments: Option<bool>,
}

impl DeployConfig {
    /// Reads the configuration file, using only built-in settings if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(@grey, "no config at {}, using built-in networks", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Resolves a network by name, applying configured overrides to the built-in settings.
    pub fn network(&self, name: &str) -> Result<Network, ConfigError> {
        let builtin = Network::builtin(name);
        let Some(config) = self.networks.get(name) else {
            return builtin.ok_or_else(|| ConfigError::UnknownNetwork(name.to_owned()));
        };

        let url = config
            .url
            .clone()
            .or_else(|| builtin.as_ref().map(|network| network.url.clone()))
            .ok_or_else(|| ConfigError::MissingUrl(name.to_owned()))?;
        let live = config
            .live
            .or(builtin.as_ref().map(|network| network.live))
            .unwrap_or(true);
        Ok(Network {
            name: name.to_owned(),
            url,
            chain_id: config
                .chain_id
                .or(builtin.as_ref().and_then(|network| network.chain_id)),
            live,
            save_deployments: config
                .save_deployments
                .or(builtin.as_ref().map(|network| network.save_deployments))
                .unwrap_or(true),
        })
    }

    /// Configured named accounts, including the well-known defaults.
    pub fn named_accounts(&self) -> NamedAccounts {
        self.named_accounts.clone().with_defaults()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported network: {0} (no rpc url is known for it)")]
    UnknownNetwork(String),
    #[error("network {0} has no url")]
    MissingUrl(String),
}
